pub mod overview;
pub mod trends;

#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum Page {
    Overview,
    Trends,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Trends => "Trends",
        }
    }
}
