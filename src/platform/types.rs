/// A repository label.
#[derive(Debug, Clone)]
pub struct Label {
    pub name: String,
}
