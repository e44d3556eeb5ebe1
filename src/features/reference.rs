//! Reference lists (countries, titles) feeding the form's select inputs

/// Which enumerated list a fetch was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Countries,
    Titles,
}

/// Load state of one reference list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReferenceList {
    #[default]
    Loading,
    Loaded(Vec<String>),
    Failed,
}

impl ReferenceList {
    pub fn from_result(result: Result<Vec<String>, String>) -> Self {
        match result {
            Ok(items) => Self::Loaded(items),
            Err(_) => Self::Failed,
        }
    }

    /// Options to show; empty unless loaded
    pub fn options(&self) -> &[String] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[cfg(test)]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// A select backed by this list only accepts input once it has loaded
    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Both lists a form modal needs
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub countries: ReferenceList,
    pub titles: ReferenceList,
}

impl ReferenceData {
    pub fn get(&self, kind: ReferenceKind) -> &ReferenceList {
        match kind {
            ReferenceKind::Countries => &self.countries,
            ReferenceKind::Titles => &self.titles,
        }
    }

    pub fn set(&mut self, kind: ReferenceKind, list: ReferenceList) {
        match kind {
            ReferenceKind::Countries => self.countries = list,
            ReferenceKind::Titles => self.titles = list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_start_loading_and_unselectable() {
        let data = ReferenceData::default();
        assert!(data.countries.is_loading());
        assert!(!data.titles.is_selectable());
        assert!(data.titles.options().is_empty());
    }

    #[test]
    fn failure_leaves_options_empty() {
        let mut data = ReferenceData::default();
        data.set(
            ReferenceKind::Titles,
            ReferenceList::from_result(Err("GET /titles returned 502".into())),
        );
        assert!(data.titles.is_failed());
        assert!(data.titles.options().is_empty());
        // the other list is independent
        assert!(data.countries.is_loading());
    }

    #[test]
    fn failed_list_is_neither_loading_nor_selectable() {
        let list = ReferenceList::from_result(Err("GET /countries failed".into()));
        assert!(!list.is_loading());
        assert!(!list.is_selectable());
        assert_eq!(list, ReferenceList::Failed);
    }

    #[test]
    fn loaded_preserves_server_order() {
        let list = ReferenceList::from_result(Ok(vec!["Tuvalu".into(), "Malta".into()]));
        assert_eq!(list.options(), ["Tuvalu".to_string(), "Malta".to_string()]);
        assert!(list.is_selectable());
    }
}
