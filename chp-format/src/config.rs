//! Renderer configuration

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Spaces(usize),
    Tabs,
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(4)
    }
}

/// Configuration for chip listings
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Indentation for chip bodies and nested chips
    pub indent_style: IndentStyle,

    /// Emit the CSV help card as `#` lines
    pub show_help: bool,

    /// Emit the direction column and skip `none` pins (CSV input only)
    pub show_directions: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_style: IndentStyle::default(),
            show_help: true,
            show_directions: true,
        }
    }
}

impl RenderConfig {
    /// Two-space indent, no help card
    pub fn compact() -> Self {
        Self {
            indent_style: IndentStyle::Spaces(2),
            show_help: false,
            ..Default::default()
        }
    }

    /// Get the indent string for one level
    pub fn indent_str(&self) -> String {
        match self.indent_style {
            IndentStyle::Spaces(n) => " ".repeat(n),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.indent_style, IndentStyle::Spaces(4));
        assert!(config.show_help);
        assert!(config.show_directions);
    }

    #[test]
    fn test_indent_str() {
        let config_tabs = RenderConfig {
            indent_style: IndentStyle::Tabs,
            ..Default::default()
        };
        assert_eq!(config_tabs.indent_str(), "\t");
        assert_eq!(RenderConfig::compact().indent_str(), "  ");
    }

    #[test]
    fn test_compact_config() {
        let config = RenderConfig::compact();
        assert!(!config.show_help);
        assert!(config.show_directions);
    }
}
