//! Paged query execution.

use crate::server::{
    data::paging::{
        descriptor,
        source::{PageQuery, PageSource},
    },
    error::paging::PagingError,
    model::paging::{skip_for, NormalizedFilter, Page, PageInfo, PageRequest},
};

/// Runs one paged query against a source.
///
/// Parses the request's descriptor (or takes `explicit_filters` instead of its filter keys),
/// computes the offset, performs exactly one fetch + count round-trip and assembles the page
/// envelope. `page` and `take` are used as given; validating them is the caller's job, see
/// `PageRequest::from_descriptor`.
///
/// # Arguments
/// - `source` - Storage collaborator for the collection being queried
/// - `request` - Validated page number, page size and raw descriptor
/// - `explicit_filters` - Caller-curated filters replacing the descriptor's filter keys
///
/// # Returns
/// - `Ok(Page<T>)` - Rows of the requested page; `info.current` echoes `request.page` even
///   when it lies past the last page, in which case `data` is empty
/// - `Err(PagingError)` - Schema rejection or storage failure from the source, unchanged
pub async fn get_paged_results<S>(
    source: &S,
    request: &PageRequest,
    explicit_filters: Option<&NormalizedFilter>,
) -> Result<Page<S::Item>, PagingError>
where
    S: PageSource + Sync,
{
    let (filter, sort) = descriptor::parse(
        &request.descriptor,
        explicit_filters,
        source.fallback_sort(),
    );

    let query = PageQuery {
        filter,
        sort,
        skip: skip_for(request.page, request.take),
        take: request.take,
    };

    let (data, total) = source.fetch_page(query).await?;

    Ok(Page {
        data,
        info: PageInfo::new(request.page, request.take, total),
    })
}
