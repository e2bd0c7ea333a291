use serde::{Deserialize, Serialize};

use crate::i18n::Text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    System,
    Mentions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTab {
    All,
    Mentions,
    System,
}

impl NotificationTab {
    pub fn cycle(self) -> Self {
        match self {
            NotificationTab::All => NotificationTab::Mentions,
            NotificationTab::Mentions => NotificationTab::System,
            NotificationTab::System => NotificationTab::All,
        }
    }

    pub fn label_key(&self) -> Text {
        match self {
            NotificationTab::All => Text::NotificationsAll,
            NotificationTab::Mentions => Text::NotificationsMentions,
            NotificationTab::System => Text::NotificationsSystem,
        }
    }
}

/// One inbox entry. Titles and bodies are stored as string-table keys so
/// an item saved under one language renders correctly in another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title_key: Text,
    pub body_key: Text,
    pub time: String,
    pub unread: bool,
}

pub fn default_notifications() -> Vec<NotificationItem> {
    vec![
        NotificationItem {
            id: "n1".into(),
            kind: NotificationKind::System,
            title_key: Text::N1Title,
            body_key: Text::N1Body,
            time: "2m".into(),
            unread: true,
        },
        NotificationItem {
            id: "n2".into(),
            kind: NotificationKind::Mentions,
            title_key: Text::N2Title,
            body_key: Text::N2Body,
            time: "1h".into(),
            unread: true,
        },
        NotificationItem {
            id: "n3".into(),
            kind: NotificationKind::System,
            title_key: Text::N3Title,
            body_key: Text::N3Body,
            time: "6h".into(),
            unread: false,
        },
        NotificationItem {
            id: "n4".into(),
            kind: NotificationKind::Mentions,
            title_key: Text::N4Title,
            body_key: Text::N4Body,
            time: "1d".into(),
            unread: false,
        },
    ]
}

/// Inbox plus the tab the popup is currently filtered to. Only the
/// items are persisted; the tab resets to `All` each session.
pub struct NotificationCenter {
    pub items: Vec<NotificationItem>,
    pub tab: NotificationTab,
}

impl NotificationCenter {
    pub fn new(items: Vec<NotificationItem>) -> Self {
        Self {
            items,
            tab: NotificationTab::All,
        }
    }

    pub fn items_for(&self, tab: NotificationTab) -> Vec<&NotificationItem> {
        self.items
            .iter()
            .filter(|item| match tab {
                NotificationTab::All => true,
                NotificationTab::Mentions => item.kind == NotificationKind::Mentions,
                NotificationTab::System => item.kind == NotificationKind::System,
            })
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| item.unread).count()
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.unread = false;
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(default_notifications())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_two_unread_items() {
        let center = NotificationCenter::default();
        assert_eq!(center.items.len(), 4);
        assert_eq!(center.unread_count(), 2);
    }

    #[test]
    fn tabs_filter_by_kind() {
        let center = NotificationCenter::default();
        assert_eq!(center.items_for(NotificationTab::All).len(), 4);
        let mentions = center.items_for(NotificationTab::Mentions);
        assert_eq!(mentions.len(), 2);
        assert!(mentions.iter().all(|i| i.kind == NotificationKind::Mentions));
        assert_eq!(center.items_for(NotificationTab::System).len(), 2);
    }

    #[test]
    fn mark_all_read_clears_the_badge() {
        let mut center = NotificationCenter::default();
        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
        assert!(center.items.iter().all(|i| !i.unread));
    }

    #[test]
    fn items_serialize_with_the_legacy_field_names() {
        let item = &default_notifications()[0];
        let json = serde_json::to_value(item).expect("serialize");
        assert_eq!(json["id"], "n1");
        assert_eq!(json["type"], "system");
        assert_eq!(json["titleKey"], "n1Title");
        assert_eq!(json["bodyKey"], "n1Body");
        assert_eq!(json["time"], "2m");
        assert_eq!(json["unread"], true);
    }

    #[test]
    fn legacy_json_parses_back() {
        let json = r#"{
            "id": "n9",
            "type": "mentions",
            "titleKey": "n2Title",
            "bodyKey": "n2Body",
            "time": "3h",
            "unread": false
        }"#;
        let item: NotificationItem = serde_json::from_str(json).expect("parse");
        assert_eq!(item.kind, NotificationKind::Mentions);
        assert_eq!(item.title_key, Text::N2Title);
        assert!(!item.unread);
    }
}
