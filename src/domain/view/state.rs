//! Section view state — app-owned, crate-provided update logic.

use crate::domain::record::DisplayResult;
use crate::error::LookupError;
use crate::network::PLACEHOLDER_IMAGE;
use crate::shared::Category;
use serde::Serialize;

/// Lifecycle of one section's lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SectionState {
    /// No search issued yet.
    Awaiting,
    Loading,
    Ready(DisplayResult),
    Failed { message: String },
    /// Blank search submitted; nothing was requested.
    EmptyInput,
}

/// Display slots of a single page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub category: Category,
    pub state: SectionState,
    placeholder_image: String,
}

impl SectionView {
    pub fn new(category: Category) -> Self {
        Self::with_placeholder(category, PLACEHOLDER_IMAGE)
    }

    pub fn with_placeholder(category: Category, placeholder: &str) -> Self {
        Self {
            category,
            state: SectionState::Awaiting,
            placeholder_image: placeholder.to_string(),
        }
    }

    /// Replace the section state.
    pub fn set(&mut self, state: SectionState) {
        self.state = state;
    }

    /// Apply a finished lookup.
    pub fn apply(&mut self, outcome: Result<DisplayResult, LookupError>) {
        self.state = match outcome {
            Ok(result) => SectionState::Ready(result),
            Err(LookupError::EmptyInput { .. }) => SectionState::EmptyInput,
            Err(err) => SectionState::Failed {
                message: err.to_string(),
            },
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SectionState::Loading)
    }

    pub fn result(&self) -> Option<&DisplayResult> {
        match &self.state {
            SectionState::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn name_text(&self) -> &str {
        match &self.state {
            SectionState::Awaiting => "Aguardando Busca",
            SectionState::Loading => "Buscando...",
            SectionState::Ready(result) => &result.name,
            SectionState::Failed { .. } => "ERRO NA BUSCA",
            SectionState::EmptyInput => "Nome Vazio",
        }
    }

    pub fn detail_lines(&self) -> Vec<String> {
        match &self.state {
            SectionState::Awaiting => vec![awaiting_prompt(self.category).to_string()],
            SectionState::Loading => Vec::new(),
            SectionState::Ready(result) => result.detail_lines(),
            SectionState::Failed { message } => vec![format!("{}. Tente outro nome.", message)],
            SectionState::EmptyInput => vec![empty_input_prompt(self.category).to_string()],
        }
    }

    /// Image source; the placeholder unless a lookup succeeded.
    pub fn image_url(&self) -> &str {
        match &self.state {
            SectionState::Ready(result) => &result.image_url,
            _ => &self.placeholder_image,
        }
    }

    pub fn image_alt(&self) -> &str {
        match &self.state {
            SectionState::Ready(result) => &result.image_alt,
            SectionState::Loading => "Carregando...",
            SectionState::Failed { .. } => "Erro na Busca",
            SectionState::Awaiting | SectionState::EmptyInput => "Placeholder",
        }
    }

    /// Plain-text rendering of the section.
    pub fn render(&self) -> String {
        let mut out = format!("== {} ==\n{}\n", self.category.label(), self.name_text());
        out.push_str(&format!("[imagem: {}]\n", self.image_url()));
        for line in self.detail_lines() {
            out.push_str("  ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

fn awaiting_prompt(category: Category) -> &'static str {
    match category {
        Category::Character => "Use a busca acima para encontrar um personagem.",
        Category::BreathingStyle => "Use a busca acima para encontrar uma respiração.",
        Category::Demon => "Use a busca acima para encontrar um Oni.",
    }
}

fn empty_input_prompt(category: Category) -> &'static str {
    match category {
        Category::Character => "Por favor, insira o nome de um personagem.",
        Category::BreathingStyle => {
            "Por favor, insira o nome de uma respiração ou do personagem associado."
        }
        Category::Demon => "Por favor, insira o nome de um Oni.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::DetailItem;

    fn tanjiro() -> DisplayResult {
        DisplayResult {
            name: "Tanjiro Kamado".to_string(),
            image_url: "https://example.com/tanjiro.png".to_string(),
            image_alt: "Tanjiro Kamado".to_string(),
            details: vec![DetailItem {
                label: "Raça".to_string(),
                value: "Human".to_string(),
            }],
        }
    }

    #[test]
    fn test_new_section_is_awaiting_with_placeholder() {
        let view = SectionView::new(Category::Demon);
        assert_eq!(view.state, SectionState::Awaiting);
        assert_eq!(view.name_text(), "Aguardando Busca");
        assert_eq!(view.image_url(), PLACEHOLDER_IMAGE);
        assert_eq!(
            view.detail_lines(),
            vec!["Use a busca acima para encontrar um Oni.".to_string()]
        );
    }

    #[test]
    fn test_loading_shows_neutral_image() {
        let mut view = SectionView::with_placeholder(Category::Character, "./ph.jpg");
        view.set(SectionState::Loading);
        assert!(view.is_loading());
        assert_eq!(view.name_text(), "Buscando...");
        assert_eq!(view.image_url(), "./ph.jpg");
        assert_eq!(view.image_alt(), "Carregando...");
        assert!(view.detail_lines().is_empty());
    }

    #[test]
    fn test_apply_success() {
        let mut view = SectionView::new(Category::Character);
        view.apply(Ok(tanjiro()));
        assert_eq!(view.name_text(), "Tanjiro Kamado");
        assert_eq!(view.image_url(), "https://example.com/tanjiro.png");
        assert_eq!(view.detail_lines(), vec!["Raça: Human".to_string()]);
        assert!(view.result().is_some());
    }

    #[test]
    fn test_apply_failure_uses_placeholder() {
        let mut view = SectionView::new(Category::Demon);
        view.apply(Ok(tanjiro()));
        view.apply(Err(LookupError::NotFound {
            category: Category::Demon,
        }));
        assert_eq!(view.name_text(), "ERRO NA BUSCA");
        assert_eq!(view.image_url(), PLACEHOLDER_IMAGE);
        assert_eq!(
            view.detail_lines(),
            vec!["no demon found. Tente outro nome.".to_string()]
        );
    }

    #[test]
    fn test_apply_empty_input() {
        let mut view = SectionView::new(Category::BreathingStyle);
        view.apply(Err(LookupError::EmptyInput {
            category: Category::BreathingStyle,
        }));
        assert_eq!(view.state, SectionState::EmptyInput);
        assert_eq!(view.name_text(), "Nome Vazio");
    }

    #[test]
    fn test_render_includes_heading_and_details() {
        let mut view = SectionView::new(Category::Character);
        view.apply(Ok(tanjiro()));
        let text = view.render();
        assert!(text.starts_with("== Personagem ==\nTanjiro Kamado\n"));
        assert!(text.contains("  Raça: Human\n"));
    }
}
