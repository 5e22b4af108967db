use crate::server::{
    data::paging::{
        descriptor, get_paged_results, Collection, CollectionRegistry, EntitySource, FieldKind,
        Json, Models, PageQuery, PageSource,
    },
    error::paging::PagingError,
    model::paging::{
        Filter, NormalizedFilter, PageRequest, QueryDescriptor, SortClause, SortDirection,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod collection;
mod descriptor_parse;
mod entity_source;
mod registry;
