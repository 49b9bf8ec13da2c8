use crate::application::dto::ElementOptions;
use crate::ports::inbound::ElementLifecyclePort;
use crate::ports::outbound::{ProgressReporter, RenderTarget, StockSource};
use crate::stock_display::domain::attributes::PRIMARY_COL;
use crate::stock_display::domain::{
    build_url, AttributeReaction, Attributes, ElementState, FetchOutcome, GenerationCounter,
    ReactionTable, UrlConfig,
};
use crate::stock_display::services::{CardBuilder, HtmlRenderer};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Custom property carrying the primary colour
pub const PRIMARY_COLOR_VARIABLE: &str = "--primaryCol";

/// Characters that could break out of a style declaration
const UNSAFE_STYLE_CHARS: &[char] = &[';', '{', '}', '<', '>', '&', '"', '\''];

/// StockFetcherElement - the stock fetcher component
///
/// Keeps the render target synchronized with the remote JSON resource
/// selected by the element's attributes.
///
/// # Type Parameters
/// * `S` - StockSource implementation
/// * `T` - RenderTarget implementation
/// * `PR` - ProgressReporter implementation
///
/// # Ordering
/// Every render request is stamped with a generation. Lifecycle methods
/// take `&self`, so several fetches may overlap; only the one stamped with
/// the latest generation is allowed to render, whatever order the
/// responses arrive in.
pub struct StockFetcherElement<S, T, PR> {
    source: S,
    target: T,
    progress_reporter: PR,
    url_config: UrlConfig,
    card_builder: CardBuilder,
    reactions: ReactionTable,
    attributes: Mutex<Attributes>,
    state: Mutex<ElementState>,
    is_connected: AtomicBool,
    generations: GenerationCounter,
}

impl<S, T, PR> StockFetcherElement<S, T, PR>
where
    S: StockSource,
    T: RenderTarget,
    PR: ProgressReporter,
{
    /// Creates an idle element; attaching the stylesheet is the only side effect
    pub fn new(source: S, target: T, progress_reporter: PR, options: ElementOptions) -> Self {
        if let Some(href) = options.stylesheet.as_deref() {
            target.attach_stylesheet(href);
        }

        Self {
            source,
            target,
            progress_reporter,
            reactions: ReactionTable::for_mode(options.url_config.mode),
            url_config: options.url_config,
            card_builder: CardBuilder::with_placeholder(options.placeholder_image),
            attributes: Mutex::new(Attributes::new()),
            state: Mutex::new(ElementState::Idle),
            is_connected: AtomicBool::new(false),
            generations: GenerationCounter::new(),
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Snapshot of the current attributes
    pub fn attributes(&self) -> Attributes {
        self.lock_attributes().clone()
    }

    pub fn state(&self) -> ElementState {
        self.lock_state().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected.load(Ordering::SeqCst)
    }

    /// Attach: fetch and render, or render the missing-identifier message
    pub async fn connected(&self) {
        self.is_connected.store(true, Ordering::SeqCst);
        self.refresh().await;
    }

    /// Stores an attribute and runs its reaction.
    ///
    /// Restyling applies at once, attached or not. Refetching waits for
    /// attach, which performs the first fetch itself.
    pub async fn set_attribute(&self, name: &str, value: &str) {
        self.lock_attributes().set(name, value);

        match self.reactions.reaction_for(name) {
            Some(AttributeReaction::Refetch)
                if self.is_connected() && !value.trim().is_empty() =>
            {
                self.refresh().await;
            }
            Some(AttributeReaction::Restyle) => self.apply_primary_color(),
            _ => {}
        }
    }

    /// Attribute names this element reacts to
    pub fn observed_attributes(&self) -> Vec<&'static str> {
        self.reactions.observed_attributes()
    }

    pub fn remove_attribute(&self, name: &str) {
        self.lock_attributes().remove(name);
    }

    /// One fetch-render cycle stamped with a fresh generation
    async fn refresh(&self) {
        let generation = self.generations.issue();
        let url = build_url(&self.url_config, &self.lock_attributes());

        let outcome = match url {
            Err(error) => {
                self.progress_reporter.report_error(&format!("⚠️  {}", error));
                FetchOutcome::from_error(&error)
            }
            Ok(url) => {
                self.enter_loading(generation);
                self.progress_reporter
                    .begin_wait(&format!("🔎 Fetching stock from {}", url));
                let result = self.source.fetch_json(&url).await;

                // A newer fetch owns the spinner now
                if self.generations.is_current(generation) {
                    self.progress_reporter.end_wait();
                    if let Err(error) = &result {
                        self.progress_reporter
                            .report_error(&format!("⚠️  Fetch failed: {}", error));
                    }
                }
                FetchOutcome::from(result)
            }
        };

        self.apply_outcome(generation, outcome);
    }

    fn enter_loading(&self, generation: u64) {
        let mut state = self.lock_state();
        if self.generations.is_current(generation) {
            *state = ElementState::Loading { generation };
        }
    }

    /// Renders `outcome` unless a newer generation has been issued.
    ///
    /// The state lock is held across the check and the render so two
    /// completions cannot interleave.
    fn apply_outcome(&self, generation: u64, outcome: FetchOutcome) -> bool {
        let mut state = self.lock_state();

        if !self.generations.is_current(generation) {
            self.progress_reporter.report(&format!(
                "⏭️  Discarding stale result #{} (latest is #{})",
                generation,
                self.generations.latest()
            ));
            return false;
        }

        let model = self.card_builder.build(&outcome);
        self.target.replace_content(HtmlRenderer::render(&model));
        self.apply_primary_color();

        *state = match outcome {
            FetchOutcome::Records(records) => {
                self.progress_reporter
                    .report_completion(&format!("✅ Rendered {} stock item(s)", records.len()));
                ElementState::Rendered {
                    item_count: records.len(),
                }
            }
            FetchOutcome::Message(message) => ElementState::Failed { message },
        };
        true
    }

    /// Pushes `primary-col` into the style variable; absent means untouched
    fn apply_primary_color(&self) {
        let color = self
            .lock_attributes()
            .get_non_empty(PRIMARY_COL)
            .map(str::to_string);

        if let Some(color) = color {
            if color.contains(UNSAFE_STYLE_CHARS) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Ignoring {} value '{}': not a plain CSS value",
                    PRIMARY_COL, color
                ));
                return;
            }
            self.target
                .set_style_variable(PRIMARY_COLOR_VARIABLE, color.trim());
        }
    }

    fn lock_attributes(&self) -> MutexGuard<'_, Attributes> {
        self.attributes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_state(&self) -> MutexGuard<'_, ElementState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<S, T, PR> ElementLifecyclePort for StockFetcherElement<S, T, PR>
where
    S: StockSource,
    T: RenderTarget,
    PR: ProgressReporter,
{
    async fn connected(&self) {
        Self::connected(self).await
    }

    async fn set_attribute(&self, name: &str, value: &str) {
        Self::set_attribute(self, name, value).await
    }

    fn remove_attribute(&self, name: &str) {
        Self::remove_attribute(self, name)
    }

    fn state(&self) -> ElementState {
        Self::state(self)
    }
}
