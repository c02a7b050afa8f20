use crate::foundation::core::Point;

/// Animatable visual state of a block. `rotation` is in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Left edge in canvas pixels.
    pub x: f64,
    /// Top edge in canvas pixels.
    pub y: f64,
    /// Width in pixels; fixed for the lifetime of a block.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Font size in pixels.
    pub font_size: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl VisualState {
    /// Center of the unrotated, unscaled box.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// In-flight scramble-reveal transition of a block's content.
#[derive(Clone, Debug, PartialEq)]
pub struct TextAnimation {
    /// Text shown once the transition completes.
    pub target_text: String,
    /// Session clock time the reveal starts at (stagger included).
    pub start_ms: f64,
    /// Length of the reveal.
    pub duration_ms: f64,
}

/// One animatable unit of text.
///
/// `initial` is captured at creation and never changes. `current` is only moved by the
/// animator, `target` only by stage activation.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutBlock {
    original_content: String,
    initial: VisualState,
    pub(crate) current: VisualState,
    pub(crate) target: VisualState,
    pub(crate) text: String,
    pub(crate) text_animation: Option<TextAnimation>,
}

impl LayoutBlock {
    /// New block resting at `initial` and showing `content`.
    pub fn new(content: impl Into<String>, initial: VisualState) -> Self {
        let content = content.into();
        Self {
            text: content.clone(),
            original_content: content,
            initial,
            current: initial,
            target: initial,
            text_animation: None,
        }
    }

    /// Source text captured at creation.
    pub fn original_content(&self) -> &str {
        &self.original_content
    }

    /// Reference state computed from source geometry.
    pub fn initial_state(&self) -> &VisualState {
        &self.initial
    }

    /// State the renderer draws this tick.
    pub fn current_state(&self) -> &VisualState {
        &self.current
    }

    /// State the animator is converging toward.
    pub fn target_state(&self) -> &VisualState {
        &self.target
    }

    /// Text currently displayed.
    pub fn text_content(&self) -> &str {
        &self.text
    }

    /// Pending or running reveal, if any.
    pub fn text_animation(&self) -> Option<&TextAnimation> {
        self.text_animation.as_ref()
    }

    /// `true` while a reveal has not completed.
    pub fn is_animating_text(&self) -> bool {
        self.text_animation.is_some()
    }

    /// Replace the target. Width always stays at the initial width.
    pub fn set_target(&mut self, target: VisualState) {
        self.target = VisualState {
            width: self.initial.width,
            ..target
        };
    }

    /// Show the original content immediately, cancelling any reveal.
    pub fn show_original(&mut self) {
        self.text_animation = None;
        self.text.clone_from(&self.original_content);
    }

    /// Show `text` immediately, cancelling any reveal.
    pub fn show_text(&mut self, text: impl Into<String>) {
        self.text_animation = None;
        self.text = text.into();
    }

    /// Snap current and target back to the initial state and restore original content.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.target = self.initial;
        self.show_original();
    }
}
