//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "客户管理");

    // Header bar
    m.insert(Key::HeaderTitle, "客户");
    m.insert(Key::HeaderSubtitle, "所有客户的姓名、职位、邮箱和国家。");
    m.insert(Key::AddCustomerButton, "添加客户");
    m.insert(Key::Refresh, "刷新");
    m.insert(Key::ThemeDark, "深色");
    m.insert(Key::ThemeLight, "浅色");

    // Customers table
    m.insert(Key::TableName, "姓名");
    m.insert(Key::TableEmail, "邮箱");
    m.insert(Key::TableEdit, "编辑");
    m.insert(Key::TableDelete, "删除");
    m.insert(Key::TableEmpty, "暂无客户。");
    m.insert(Key::TableLoading, "正在加载客户...");
    m.insert(Key::TableLoadFailed, "无法加载客户列表。");

    // Customer form
    m.insert(Key::AddCustomerTitle, "添加客户");
    m.insert(Key::EditCustomerTitle, "编辑客户");
    m.insert(Key::FieldFirstName, "名");
    m.insert(Key::FieldLastName, "姓");
    m.insert(Key::FieldEmail, "邮箱地址");
    m.insert(Key::FieldTitle, "职位");
    m.insert(Key::FieldCountry, "国家");
    m.insert(Key::SelectPlaceholder, "请选择...");
    m.insert(Key::SelectLoading, "加载中...");
    m.insert(Key::SelectFailed, "加载失败");
    m.insert(Key::Submit, "提交");
    m.insert(Key::Submitting, "提交中...");
    m.insert(Key::Cancel, "取消");
    m.insert(Key::FormSubmitFailed, "表单提交失败");

    // Delete dialog
    m.insert(Key::DeleteCustomerTitle, "删除");
    m.insert(Key::DeleteCustomerMessage, "该客户将被永久删除。");
    m.insert(Key::Delete, "删除");
    m.insert(Key::Deleting, "删除中...");

    // Toasts
    m.insert(Key::CustomerSaved, "客户已保存");
    m.insert(Key::CustomerDeleted, "客户已删除");
    m.insert(Key::DeleteFailed, "删除客户失败");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
