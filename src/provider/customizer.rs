use crate::models::{Channel, Locale};
use crate::query_builder::SelectQuery;

/// Query-customization hook invoked once per batcher creation
///
/// Collaborators narrow the base selection to what is exportable for the
/// given channel and locale, e.g. joining channel availability or
/// filtering disabled products. Injected explicitly instead of dispatched
/// over an event bus. Takes the query by value and returns the (possibly)
/// modified query, matching the builder's chaining style.
pub trait QueryCustomizer: Send + Sync {
    fn customize(&self, query: SelectQuery, channel: &Channel, locale: &Locale) -> SelectQuery;
}

impl<F> QueryCustomizer for F
where
    F: Fn(SelectQuery, &Channel, &Locale) -> SelectQuery + Send + Sync,
{
    fn customize(&self, query: SelectQuery, channel: &Channel, locale: &Locale) -> SelectQuery {
        self(query, channel, locale)
    }
}

/// Customizer that leaves the base query untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCustomizer;

impl QueryCustomizer for NoopCustomizer {
    fn customize(&self, query: SelectQuery, _channel: &Channel, _locale: &Locale) -> SelectQuery {
        query
    }
}
