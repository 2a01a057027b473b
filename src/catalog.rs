use crate::{
    constants::{DEFAULT_PAGE_SIZE, PLACEHOLDER_IMAGE_URL},
    core::{
        paginate::{page_count, paginate, Navigation, PageNavigator, PageSlice},
        sorter::{sort, OrderedCollection},
    },
    io::{
        dataset::DatasetSource,
        export::{export_collection, ExportOutcome},
    },
    utils::util::{format_number_with_commas, Result},
};
use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub page_size: NonZeroUsize,
    pub placeholder_image_url: String,
}

impl CatalogConfig {
    pub fn new(page_size: usize, placeholder_image_url: impl Into<String>) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size)
            .ok_or_else(|| crate::gatein_error!("page-size must be >= 1"))?;
        let placeholder_image_url = placeholder_image_url.into();
        if placeholder_image_url.trim().is_empty() {
            return Err(crate::gatein_error!(
                "placeholder-image-url must not be empty"
            ));
        }
        Ok(Self {
            page_size,
            placeholder_image_url,
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }
}

/// The ordered catalog plus the page the user is looking at.
///
/// Sorting happens only when a dataset is (re)loaded; navigation just projects a
/// different window over the cached collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
    ordered: OrderedCollection,
    navigator: PageNavigator,
    generation: u64,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            ordered: OrderedCollection::default(),
            navigator: PageNavigator::new(0),
            generation: 0,
        }
    }

    pub fn load<S: DatasetSource + ?Sized>(source: &S, config: CatalogConfig) -> Result<Self> {
        let mut catalog = Self::new(config);
        catalog.reload(source)?;
        Ok(catalog)
    }

    /// Fetches and sorts a fresh dataset. On failure the current collection is
    /// left untouched.
    pub fn reload<S: DatasetSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        let raw_records = source.fetch_all()?;
        let ordered = sort(raw_records)?;
        log::info!(
            "Loaded {} options from {}",
            format_number_with_commas(ordered.len()),
            source.name()
        );
        self.replace(ordered);
        Ok(())
    }

    /// Swaps in a new collection and keeps the current page within range.
    pub fn replace(&mut self, ordered: OrderedCollection) {
        self.ordered = ordered;
        self.generation += 1;
        self.navigator
            .set_page_count(page_count(self.ordered.len(), self.config.page_size));
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn ordered(&self) -> &OrderedCollection {
        &self.ordered
    }

    /// Number of successful loads so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn navigator(&self) -> &PageNavigator {
        &self.navigator
    }

    pub fn current_page(&self) -> usize {
        self.navigator.current()
    }

    pub fn page_count(&self) -> usize {
        self.navigator.page_count()
    }

    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        let changed = self.navigator.apply(navigation);
        if !changed {
            log::debug!(
                "Ignoring navigation `{}` on page {} of {}",
                navigation,
                self.navigator.current(),
                self.navigator.page_count()
            );
        }
        changed
    }

    pub fn page(&self) -> PageSlice<'_> {
        paginate(
            &self.ordered,
            self.config.page_size,
            self.navigator.current(),
        )
    }

    pub fn export(&self) -> Result<ExportOutcome> {
        export_collection(&self.ordered, &self.config.placeholder_image_url)
    }
}
