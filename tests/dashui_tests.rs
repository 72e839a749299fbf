#[cfg(test)]
mod tests {
    use promptsheet::app::catalog::{CategoryFilter, CategoryKey};
    use promptsheet::app::dashui::app::{PromptSheetApp, ThemeChoice};
    use promptsheet::app::dashui::SheetAction;

    #[test]
    fn test_app_default() {
        let app = PromptSheetApp::default();

        assert_eq!(app.theme, ThemeChoice::Latte);
        assert!(!app.help_window.open);
        assert_eq!(app.cheatsheet.state().active_category(), CategoryFilter::All);
        assert!(app.cheatsheet.state().expanded_ids().is_empty());
    }

    #[test]
    fn test_theme_choice_display_and_palette() {
        let names: Vec<String> = ThemeChoice::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(names, vec!["Latte", "Frappe", "Macchiato", "Mocha"]);

        assert_eq!(ThemeChoice::Mocha.palette().base, catppuccin_egui::MOCHA.base);
        assert_eq!(ThemeChoice::Latte.palette().text, catppuccin_egui::LATTE.text);
    }

    #[test]
    fn test_only_theme_is_persisted() {
        let mut app = PromptSheetApp::default();
        app.theme = ThemeChoice::Mocha;
        app.cheatsheet
            .apply(SheetAction::SelectCategory(CategoryFilter::Only(CategoryKey::Clarity)));
        app.cheatsheet.apply(SheetAction::Toggle(6));
        app.help_window.open = true;

        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value, serde_json::json!({ "theme": "Mocha" }));

        let restored: PromptSheetApp = serde_json::from_value(value).unwrap();
        assert_eq!(restored.theme, ThemeChoice::Mocha);
        assert_eq!(restored.cheatsheet.state().active_category(), CategoryFilter::All);
        assert!(restored.cheatsheet.state().expanded_ids().is_empty());
        assert!(!restored.help_window.open);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let restored: PromptSheetApp = serde_json::from_str("{}").unwrap();
        assert_eq!(restored.theme, ThemeChoice::Latte);
    }
}
