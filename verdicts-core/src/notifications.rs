use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: String,
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

pub fn mark_read(items: &mut [Notification], id: i64) -> bool {
    match items.iter_mut().find(|n| n.id == id) {
        Some(item) if !item.read => {
            item.read = true;
            true
        }
        _ => false,
    }
}

pub fn mark_all_read(items: &mut [Notification]) {
    for item in items {
        item.read = true;
    }
}

/// Bell badge text. Hidden at zero, capped so the badge stays readable.
pub fn badge_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> Vec<Notification> {
        vec![
            Notification {
                id: 1,
                title: "Case approved".into(),
                read: false,
                ..Notification::default()
            },
            Notification {
                id: 2,
                title: "Trial scheduled".into(),
                read: true,
                ..Notification::default()
            },
            Notification {
                id: 3,
                title: "New application".into(),
                read: false,
                ..Notification::default()
            },
        ]
    }

    #[test]
    fn unread_count_skips_read_items() {
        assert_eq!(unread_count(&feed()), 2);
    }

    #[test]
    fn mark_read_flips_exactly_one_item() {
        let mut items = feed();
        assert!(mark_read(&mut items, 1));
        assert_eq!(unread_count(&items), 1);
        assert!(!mark_read(&mut items, 1));
        assert!(!mark_read(&mut items, 99));
    }

    #[test]
    fn mark_all_read_empties_the_badge() {
        let mut items = feed();
        mark_all_read(&mut items);
        assert_eq!(unread_count(&items), 0);
        assert_eq!(badge_label(unread_count(&items)), None);
    }

    #[test]
    fn badge_label_caps_large_counts() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(7), Some("7".into()));
        assert_eq!(badge_label(150), Some("99+".into()));
    }
}
