/// A closed set of modes for one pane family.
///
/// The pane base stores the raw mode name so it reads back exactly; concrete
/// panes parse it through this trait every frame instead of matching strings.
pub trait PaneMode: Sized + Copy + Default {
    /// Parse a mode name. `None` for anything not in the set.
    fn parse(name: &str) -> Option<Self>;

    /// The canonical name for this mode.
    fn name(&self) -> &'static str;

    /// Parse a mode name, falling back to `Default` for unknown names.
    ///
    /// The empty string is the initial mode of every pane and falls back
    /// silently; anything else unrecognized is logged at debug level, since
    /// this runs every frame.
    fn parse_or_default(name: &str) -> Self {
        match Self::parse(name) {
            Some(mode) => mode,
            None => {
                if !name.is_empty() {
                    tracing::debug!(
                        mode = name,
                        fallback = Self::default().name(),
                        "unrecognized pane mode"
                    );
                }
                Self::default()
            }
        }
    }
}
