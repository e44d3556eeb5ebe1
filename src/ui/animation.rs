//! Overlay animations built on `iced_anim` transitions

mod fade;

pub use fade::FadeAnimation;
