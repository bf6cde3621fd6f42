/// Transient notification shown after an edit is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

impl Notice {
    pub fn saved() -> Self {
        Self {
            title: "Content Updated".to_string(),
            description: "Your changes have been saved successfully.".to_string(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn failed(description: impl Into<String>) -> Self {
        Self {
            title: "Update Failed".to_string(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}
