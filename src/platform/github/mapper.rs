use crate::platform::types;

/// Map an octocrab Label to our platform Label type.
pub fn map_label(label: octocrab::models::Label) -> types::Label {
    types::Label { name: label.name }
}
