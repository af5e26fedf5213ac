//! Theme configuration for `Jokebox`.
//!
//! Warm light mode with a single playful accent. System fonts, flat
//! surfaces, fast transitions.

/// Color palette for the application.
pub mod colors {
    /// Background colors.
    pub mod background {
        /// Primary page background - soft cream.
        pub const PRIMARY: &str = "#fdf6e3";
        /// Elevated card background.
        pub const CARD: &str = "#ffffff";
        /// Hover state background.
        pub const HOVER: &str = "#f4ead2";
    }

    /// Text colors.
    pub mod text {
        /// Primary text color.
        pub const PRIMARY: &str = "#292524";
        /// Secondary/muted text.
        pub const SECONDARY: &str = "#78716c";
    }

    /// Accent colors.
    pub mod accent {
        /// Primary accent - sunny amber.
        pub const PRIMARY: &str = "#f59e0b";
        /// Primary accent darker variant for hover states.
        pub const PRIMARY_DIM: &str = "#b45309";
        /// Success - fresh green.
        pub const SUCCESS: &str = "#16a34a";
        /// Error - tomato red.
        pub const ERROR: &str = "#dc2626";
        /// Info - sky blue.
        pub const INFO: &str = "#0284c7";
    }

    /// Border and shadow colors.
    pub mod border {
        /// Default border.
        pub const DEFAULT: &str = "rgba(0, 0, 0, 0.08)";
        /// Card shadow.
        pub const SHADOW: &str = "0 4px 16px rgba(0, 0, 0, 0.08)";
    }
}

/// Typography configuration.
pub mod typography {
    /// Font family - system stack.
    pub const FONT_FAMILY: &str =
        "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

    /// Font sizes.
    pub mod sizes {
        /// Small text.
        pub const SM: &str = "0.875rem";
        /// Base text.
        pub const BASE: &str = "1rem";
        /// Joke text.
        pub const LG: &str = "1.375rem";
        /// Heading.
        pub const HEADING: &str = "1.75rem";
    }
}

/// Spacing values.
pub mod spacing {
    /// Small spacing.
    pub const SM: &str = "0.5rem";
    /// Medium spacing.
    pub const MD: &str = "1rem";
    /// Large spacing.
    pub const LG: &str = "1.5rem";
    /// Extra large spacing.
    pub const XL: &str = "2.5rem";
}

/// Border radius values.
pub mod radius {
    /// Small radius.
    pub const SM: &str = "0.375rem";
    /// Medium radius.
    pub const MD: &str = "0.75rem";
    /// Large radius for cards.
    pub const LG: &str = "1.25rem";
}

/// Animation/transition configuration.
pub mod animation {
    /// Fast transition for interactive elements.
    pub const FAST: &str = "0.15s ease";
    /// Normal transition for most UI changes.
    pub const NORMAL: &str = "0.25s ease";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  /* Background colors */
  --bg-primary: {bg_primary};
  --bg-card: {bg_card};
  --bg-hover: {bg_hover};

  /* Text colors */
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};

  /* Accent colors */
  --accent-primary: {accent_primary};
  --accent-primary-dim: {accent_primary_dim};
  --accent-success: {accent_success};
  --accent-error: {accent_error};
  --accent-info: {accent_info};

  /* Borders and shadows */
  --border-default: {border_default};
  --shadow-card: {shadow_card};

  /* Typography */
  --font-family: {font_family};
  --font-size-sm: {font_sm};
  --font-size-base: {font_base};
  --font-size-lg: {font_lg};
  --font-size-heading: {font_heading};

  /* Spacing */
  --spacing-sm: {spacing_sm};
  --spacing-md: {spacing_md};
  --spacing-lg: {spacing_lg};
  --spacing-xl: {spacing_xl};

  /* Border radius */
  --radius-sm: {radius_sm};
  --radius-md: {radius_md};
  --radius-lg: {radius_lg};

  /* Transitions */
  --transition-fast: {transition_fast};
  --transition-normal: {transition_normal};
}}",
        bg_primary = colors::background::PRIMARY,
        bg_card = colors::background::CARD,
        bg_hover = colors::background::HOVER,
        text_primary = colors::text::PRIMARY,
        text_secondary = colors::text::SECONDARY,
        accent_primary = colors::accent::PRIMARY,
        accent_primary_dim = colors::accent::PRIMARY_DIM,
        accent_success = colors::accent::SUCCESS,
        accent_error = colors::accent::ERROR,
        accent_info = colors::accent::INFO,
        border_default = colors::border::DEFAULT,
        shadow_card = colors::border::SHADOW,
        font_family = typography::FONT_FAMILY,
        font_sm = typography::sizes::SM,
        font_base = typography::sizes::BASE,
        font_lg = typography::sizes::LG,
        font_heading = typography::sizes::HEADING,
        spacing_sm = spacing::SM,
        spacing_md = spacing::MD,
        spacing_lg = spacing::LG,
        spacing_xl = spacing::XL,
        radius_sm = radius::SM,
        radius_md = radius::MD,
        radius_lg = radius::LG,
        transition_fast = animation::FAST,
        transition_normal = animation::NORMAL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.contains(":root"));
        assert!(css.contains("--bg-primary"));
        assert!(css.contains("--accent-primary"));
        assert!(css.contains("--font-family"));
    }

    #[test]
    fn test_color_values() {
        assert!(colors::background::PRIMARY.starts_with('#'));
        assert!(colors::accent::PRIMARY.starts_with('#'));
    }
}
