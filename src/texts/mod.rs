//! User-facing message texts
//!
//! Everything the bot says, in one place. The bot speaks Arabic to match
//! its audience; code and logs stay in English.

use crate::models::{Category, FlowKind, RegistrationRecord};

/// Greeting shown by the start command, sent with the operation menu
pub const MENU_GREETING: &str = "أهلاً! اختر العملية التي تريدها:";

/// Menu re-prompt for text that matches no operation and no session
pub const MENU_CHOOSE: &str = "اختر العملية من الأزرار:";

pub const ASK_REGISTRANT_NAME: &str = "أكتب اسمك (اسم المسجل) ثم أرسل:";

pub const ASK_CATEGORY: &str = "اختر الفئة:";

/// Re-prompt when the category answer matches none of the buttons
pub const INVALID_CATEGORY: &str = "الرجاء اختيار فئة من الأزرار الظاهرة.";

/// Re-prompt when a name answer is empty after trimming
pub const EMPTY_NAME: &str = "الاسم لا يمكن أن يكون فارغاً. أكتب الاسم ثم أرسل:";

pub const ASK_CHAIR_PARTNER: &str = "اكتب اسم الطالب الذي سيشاركك الكرسي:";

pub const ASK_LOCKER_PARTNER1: &str = "اكتب اسم الطالب الأول الذي سيشاركك الخزانة:";

pub const ASK_LOCKER_PARTNER2: &str = "اكتب اسم الطالب الثاني الذي سيشاركك الخزانة:";

pub const CANCELLED: &str = "تم الإلغاء.";

/// Shown when the ledger write fails; the submission is not retried
pub const SAVE_FAILED: &str = "حصل خطأ أثناء حفظ البيانات. حاول لاحقاً.";

/// Keyboard rows for the operation menu, both choices on one row
pub fn menu_keyboard() -> Vec<Vec<String>> {
    vec![vec![
        FlowKind::Chair.menu_label().to_string(),
        FlowKind::Locker.menu_label().to_string(),
    ]]
}

/// Keyboard rows for the category picker, one label per row
pub fn category_keyboard() -> Vec<Vec<String>> {
    Category::ALL
        .iter()
        .map(|category| vec![category.label().to_string()])
        .collect()
}

/// Completion message naming every student on the registration
pub fn confirmation(record: &RegistrationRecord) -> String {
    match record.kind {
        FlowKind::Chair => format!(
            "تم تسجيل الطالبين:\n- {}\n- {}\nتم تسجيلهما على الكرسي.",
            record.registrant, record.partner1
        ),
        FlowKind::Locker => format!(
            "تم تسجيل الطلاب:\n- {}\n- {}\n- {}\nتم تسجيلهم على الخزانة.",
            record.registrant, record.partner1, record.partner2
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_keyboard_is_one_row_of_two() {
        let rows = menu_keyboard();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["توزيع الكراسي", "توزيع الخزنات"]);
    }

    #[test]
    fn test_category_keyboard_is_one_label_per_row() {
        let rows = category_keyboard();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 1));
        assert_eq!(rows[0][0], "الأولى");
    }

    #[test]
    fn test_confirmation_names_everyone() {
        let chair =
            RegistrationRecord::chair("Ali".to_string(), Category::First, "Sara".to_string());
        let text = confirmation(&chair);
        assert!(text.starts_with("تم تسجيل الطالبين:"));
        assert!(text.contains("- Ali"));
        assert!(text.contains("- Sara"));

        let locker = RegistrationRecord::locker(
            "Omar".to_string(),
            Category::Third,
            "Hana".to_string(),
            "Lina".to_string(),
        );
        let text = confirmation(&locker);
        assert!(text.starts_with("تم تسجيل الطلاب:"));
        assert!(text.contains("- Omar"));
        assert!(text.contains("- Hana"));
        assert!(text.contains("- Lina"));
    }
}
