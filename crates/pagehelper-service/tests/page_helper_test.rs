//! End-to-end pagination flow: bind a query, configure the engine, run a
//! fake repository query and transform the page into views.

use pagehelper_config::PaginationConfig;
use pagehelper_core::{copy_properties, Page, PageHelperError, PageRequest};
use pagehelper_service::{
    build_page_helper_module, empty_page, transform, transform_into, LocalPageEngine, PageHelper,
    PageQuery, PaginationConfigurer, TargetType,
};
use shaku::HasComponent;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
struct OrderEntity {
    id: u64,
    name: String,
    created_at: u64,
}

#[derive(Debug, Default, PartialEq)]
struct OrderSummary {
    id: u64,
    name: String,
}

copy_properties!(OrderEntity => OrderSummary { id, name });

/// In-memory table that honours the pending page directive like a
/// paginated query would.
struct OrderRepository {
    rows: Vec<OrderEntity>,
    config: PaginationConfig,
}

impl OrderRepository {
    fn with_rows(count: u64) -> Self {
        let rows = (1..=count)
            .map(|id| OrderEntity {
                id,
                name: format!("order-{id}"),
                created_at: 1_000 + id,
            })
            .collect();
        Self {
            rows,
            config: PaginationConfig::default(),
        }
    }

    fn find_all(&self) -> Page<OrderEntity> {
        let mut rows = self.rows.clone();
        let Some(directive) = LocalPageEngine::take() else {
            return Page::of(rows);
        };

        if directive.order_by.as_deref() == Some("created_at DESC") {
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        let total = rows.len() as u64;
        let records = if directive.is_paged() {
            rows.into_iter()
                .skip(directive.offset())
                .take(directive.limit())
                .collect()
        } else {
            rows
        };
        directive.into_page_with(records, total, &self.config)
    }
}

fn configurer() -> Arc<dyn PaginationConfigurer> {
    build_page_helper_module().resolve()
}

#[test]
fn test_names_from_two_record_page() {
    let page = Page::new(
        vec![
            OrderEntity { id: 1, name: "a".to_string(), created_at: 0 },
            OrderEntity { id: 2, name: "b".to_string(), created_at: 0 },
        ],
        1,
        2,
        2,
    );

    let names = transform(Some(page), Some(|o: OrderEntity| o.name)).unwrap();
    assert_eq!(names.list, vec!["a", "b"]);
    assert_eq!(names.total(), 2);
    assert_eq!(names.info.page_num, 1);
    assert_eq!(names.info.page_size, 2);
}

#[test]
fn test_sort_in_effect_for_paged_query() {
    LocalPageEngine::clear();
    let repository = OrderRepository::with_rows(95);
    let configurer = configurer();

    configurer.begin_paging(Some(&PageRequest::new(3, 20)));
    configurer.apply_sort("created_at DESC");

    let pending = LocalPageEngine::current().unwrap();
    assert_eq!((pending.page_num, pending.page_size), (3, 20));
    assert_eq!(pending.order_by.as_deref(), Some("created_at DESC"));

    let page = repository.find_all();
    assert_eq!(page.len(), 20);
    assert_eq!(page.list[0].id, 55);
    assert_eq!(page.total(), 95);
    assert_eq!(page.pages(), 5);
    assert_eq!(page.info.navigatepage_nums, vec![1, 2, 3, 4, 5]);
    assert_eq!(LocalPageEngine::current(), None);
}

#[test]
fn test_query_to_view_page() {
    LocalPageEngine::clear();
    let repository = OrderRepository::with_rows(12);
    let config = PaginationConfig {
        default_page_size: 5,
        ..PaginationConfig::default()
    };
    let query: PageQuery = serde_json::from_str(r#"{"pageNum": 2}"#).unwrap();
    let request = query.into_page_request(&config).unwrap();

    configurer().begin_paging_as_requested(Some(&request));
    let views = transform_into(
        Some(repository.find_all()),
        &TargetType::<OrderSummary>::default_constructed(),
    )
    .unwrap();

    assert_eq!(
        views.list.iter().map(|v| v.id).collect::<Vec<_>>(),
        vec![6, 7, 8, 9, 10]
    );
    assert_eq!(views.list[0].name, "order-6");
    assert_eq!(views.info.start_row, 6);
    assert_eq!(views.info.end_row, 10);
    assert!(views.has_previous() && views.has_next());
}

#[test]
fn test_unpaged_request_returns_everything() {
    LocalPageEngine::clear();
    let repository = OrderRepository::with_rows(7);
    let helper = PageHelper::new(Arc::new(LocalPageEngine::new()));

    helper.begin_paging(Some(&PageRequest::unpaged()));
    let page = repository.find_all();

    assert_eq!(page.len(), 7);
    assert_eq!(page.pages(), 1);
    assert_eq!(page.info.page_num, 1);
}

#[test]
fn test_empty_result_is_empty_page() {
    LocalPageEngine::clear();
    let repository = OrderRepository::with_rows(3);

    configurer().begin_paging(Some(&PageRequest::new(9, 10)));
    let page = repository.find_all();
    assert!(page.is_empty());

    let views = transform(Some(page), None::<fn(OrderEntity) -> String>).unwrap();
    assert_eq!(views, empty_page());
}

#[test]
fn test_invalid_query_is_rejected_before_paging() {
    LocalPageEngine::clear();
    let query: PageQuery = serde_json::from_str(r#"{"pageNum": 0}"#).unwrap();

    let err = query
        .into_page_request(&PaginationConfig::default())
        .unwrap_err();
    assert!(matches!(err, PageHelperError::Validation(_)));
    assert_eq!(LocalPageEngine::current(), None);
}
