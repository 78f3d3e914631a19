//! Filter → sort → slice pipeline

use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::query::filter::filter_records;
use crate::query::result::PageResult;
use crate::query::sort::SortKey;
use crate::query::PageRequest;
use crate::record::Record;

/// Paginates record collections according to a [`PageRequest`]
///
/// A pager holds only configuration and is immutable, so one instance can be
/// shared across threads and requests.
///
/// # Example
///
/// ```rust
/// use query_pager::{PageRequest, PagerConfig, QueryPager, SortDirection};
///
/// #[derive(Debug)]
/// struct Product { name: String, price: f64 }
/// query_pager::record_schema!(Product { name: String, price: f64 });
///
/// let products: Vec<Product> = (1..=25)
///     .map(|n| Product { name: format!("item-{n}"), price: f64::from(n) })
///     .collect();
///
/// let pager = QueryPager::new(PagerConfig::default());
/// let request = PageRequest::new(3, 10).with_sort("price", SortDirection::Ascending);
/// let page = pager.paginate(&products, &request).unwrap();
///
/// assert_eq!(page.items.len(), 5);
/// assert_eq!(page.items[0].name, "item-21");
/// assert_eq!(page.total_items, 25);
/// assert_eq!(page.total_pages, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryPager {
    config: PagerConfig,
}

impl QueryPager {
    /// Create a pager with the given configuration
    #[must_use]
    pub fn new(config: PagerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Produce one page of `source`
    ///
    /// Steps, in order: validate the page parameters, keep records matching
    /// the keyword, sort by the requested field, count, then slice out the
    /// requested page. A page past the end comes back empty with accurate
    /// totals.
    ///
    /// `source` is not enumerated until the filter step and is never
    /// modified; pass `&records` to page over borrowed data.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPageParameters`] when the page number or size is zero,
    ///   or the size exceeds the configured maximum
    /// - [`Error::FieldNotFound`] when the sort field does not exist on `R`
    /// - [`Error::UnsortableField`] when the sort field cannot be ordered
    pub fn paginate<R, I>(&self, source: I, request: &PageRequest) -> Result<PageResult<R>>
    where
        R: Record,
        I: IntoIterator<Item = R>,
    {
        if let Err(err) = self.validate(request) {
            tracing::warn!(
                current_page = request.current_page,
                page_size = request.page_size,
                "rejected page request: {}",
                err
            );
            return Err(err);
        }

        // Resolve before touching the source so a bad field name reads nothing
        let sort_key = request
            .sort_field()
            .map(|field| SortKey::resolve::<R>(field, request.sort_direction))
            .transpose()
            .inspect_err(|err| tracing::warn!("rejected sort field: {}", err))?;

        let filtered = filter_records(source, request.keyword());
        let ordered = match sort_key {
            Some(key) => key.apply(filtered),
            None => filtered,
        };

        let total_items = ordered.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = request.page_size as usize;
        let items: Vec<R> = ordered.into_iter().skip(offset).take(take).collect();

        let page = PageResult::new(items, request.current_page, request.page_size, total_items);

        tracing::debug!(
            current_page = page.current_page,
            page_size = page.page_size,
            total_items = page.total_items,
            total_pages = page.total_pages,
            returned = page.items.len(),
            keyword = request.keyword().is_some(),
            sort_field = request.sort_field().unwrap_or_default(),
            "page produced"
        );

        Ok(page)
    }

    fn validate(&self, request: &PageRequest) -> Result<()> {
        let (current_page, page_size) = (request.current_page, request.page_size);

        if page_size == 0 {
            return Err(Error::invalid_page(
                current_page,
                page_size,
                "page size must be at least 1",
            ));
        }
        if current_page == 0 {
            return Err(Error::invalid_page(
                current_page,
                page_size,
                "page number must be at least 1",
            ));
        }
        if let Some(max) = self.config.max_page_size {
            if page_size > max {
                return Err(Error::invalid_page(
                    current_page,
                    page_size,
                    format!("page size must not exceed {max}"),
                ));
            }
        }
        Ok(())
    }
}

/// Paginate with the default configuration
///
/// # Errors
///
/// See [`QueryPager::paginate`].
pub fn paginate<R, I>(source: I, request: &PageRequest) -> Result<PageResult<R>>
where
    R: Record,
    I: IntoIterator<Item = R>,
{
    QueryPager::default().paginate(source, request)
}
