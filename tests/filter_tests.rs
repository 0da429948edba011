mod common;

use chrono::TimeZone;
use common::fixtures::*;
use common::{TestResult, create_services, create_view};
use serde_json::json;
use vitrine::{PAGE_TEMPLATE, RenderError, render, standard_registry};

#[test]
fn test_filter_page_moves_head_block_into_the_shell() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let services = create_services(sample_config());
    let registry = standard_registry();
    let mut view = create_view(&services, &[]);
    view.set("suppliers", sample_suppliers())?;
    view.set("categories", sample_categories())?;
    view.set("attributes", sample_attributes())?;

    let mut filter = registry.create("catalog/filter", services.config())?;
    let rendered = render(filter.as_mut(), &mut view, "filter-1")?;

    // The capture is not part of the component's own markup.
    assert!(!rendered.html.contains("opensearchdescription"));

    view.set("content", rendered.html)?;
    let page = view.render(PAGE_TEMPLATE)?;

    let head_end = page.find("</head>").unwrap();
    let link = page.find("application/opensearchdescription+xml").unwrap();
    assert!(link < head_end, "discovery link must sit inside <head>");
    assert_eq!(
        page.matches("application/opensearchdescription+xml").count(),
        1
    );
    assert!(page.contains("title=\"Test Shop\""));
    Ok(())
}

#[test]
fn test_supplier_checkboxes_follow_the_selection() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let services = create_services(sample_config());
    let registry = standard_registry();
    let mut view = create_view(&services, &[("f_supid", "12"), ("f_supid", "19")]);
    view.set("suppliers", sample_suppliers())?;

    let mut filter = registry.create("catalog/filter", services.config())?;
    let rendered = render(filter.as_mut(), &mut view, "filter-1")?;

    assert_eq!(rendered.html.matches("name=\"f_supid\"").count(), 3);
    assert_eq!(rendered.html.matches("checked=\"checked\"").count(), 2);
    assert!(rendered.html.contains("value=\"12\" checked=\"checked\""));
    assert!(rendered.html.contains("value=\"19\" checked=\"checked\""));
    assert!(!rendered.html.contains("value=\"15\" checked=\"checked\""));
    Ok(())
}

#[test]
fn test_search_parameter_is_escaped_in_the_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let services = create_services(sample_config());
    let registry = standard_registry();
    let mut view = create_view(&services, &[("f_search", "<script>alert(1)</script>")]);

    let mut filter = registry.create("catalog/filter", services.config())?;
    let rendered = render(filter.as_mut(), &mut view, "filter-1")?;

    assert!(!rendered.html.contains("<script>"));
    assert!(rendered.html.contains("&lt;script&gt;"));
    Ok(())
}

#[test]
fn test_cache_metadata_aggregates_over_the_tree() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let services = create_services(sample_config());
    let registry = standard_registry();
    let mut view = create_view(&services, &[]);
    view.set("suppliers", sample_suppliers())?;
    view.set("categories", sample_categories())?;

    let mut filter = registry.create("catalog/filter", services.config())?;
    let rendered = render(filter.as_mut(), &mut view, "filter-1")?;

    // tags from two different subparts end up in one set
    for tag in ["catalog-101", "catalog-102", "catalog-103", "supplier-12", "supplier-19"] {
        assert!(rendered.cache.contains_tag(tag), "missing tag {tag}");
    }
    // the earliest promotion end wins
    assert_eq!(
        rendered.cache.expires(),
        Some(chrono::Utc.with_ymd_and_hms(2026, 6, 15, 0, 0, 0).unwrap())
    );
    Ok(())
}

#[test]
fn test_subparts_render_in_configured_order() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({
        "shop": sample_config()["shop"],
        "client": { "html": { "catalog": { "filter": {
            "subparts": ["catalog/filter/supplier", "catalog/filter/search"]
        } } } }
    });
    let services = create_services(config);
    let registry = standard_registry();
    let mut view = create_view(&services, &[]);
    view.set("suppliers", sample_suppliers())?;
    view.set("categories", sample_categories())?;

    let mut filter = registry.create("catalog/filter", services.config())?;
    let rendered = render(filter.as_mut(), &mut view, "filter-1")?;

    let supplier = rendered.html.find("catalog-filter-supplier").unwrap();
    let search = rendered.html.find("catalog-filter-search").unwrap();
    assert!(supplier < search);
    // subparts not in the configured list do not render
    assert!(!rendered.html.contains("catalog-filter-tree"));
    Ok(())
}

#[test]
fn test_empty_subpart_list_makes_the_filter_a_leaf() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({
        "client": { "html": { "catalog": { "filter": { "subparts": [] } } } }
    });
    let services = create_services(config);
    let registry = standard_registry();
    let mut view = create_view(&services, &[]);

    let mut filter = registry.create("catalog/filter", services.config())?;
    let rendered = render(filter.as_mut(), &mut view, "filter-1")?;

    assert!(rendered.html.contains("<form class=\"catalog-filter\""));
    assert!(!rendered.html.contains("catalog-filter-search"));
    Ok(())
}

#[test]
fn test_unknown_subpart_aborts_the_render() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({
        "client": { "html": { "catalog": { "filter": { "subparts": ["basket/mini"] } } } }
    });
    let services = create_services(config);
    let registry = standard_registry();
    let mut view = create_view(&services, &[]);

    let mut filter = registry.create("catalog/filter", services.config())?;
    let err = render(filter.as_mut(), &mut view, "filter-1").unwrap_err();
    assert!(matches!(err, RenderError::UnknownClient { .. }));
    Ok(())
}

#[test]
fn test_unconfigured_variant_fails_at_creation() {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({
        "client": { "html": { "catalog": { "filter": { "name": "Fancy" } } } }
    });
    let services = create_services(config);
    let registry = standard_registry();

    let err = registry
        .create("catalog/filter", services.config())
        .unwrap_err();
    match err {
        RenderError::UnknownClient { path, variant } => {
            assert_eq!(path, "catalog/filter");
            assert_eq!(variant, "Fancy");
        }
        other => panic!("expected UnknownClient, got {other}"),
    }
}

#[test]
fn test_container_decorator_is_opt_in_per_path() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({
        "client": { "html": { "catalog": { "filter": { "supplier": {
            "decorators": { "local": ["Container"] }
        } } } } }
    });
    let services = create_services(config);
    let registry = standard_registry();
    let mut view = create_view(&services, &[]);
    view.set("suppliers", sample_suppliers())?;

    let mut filter = registry.create("catalog/filter", services.config())?;
    let rendered = render(filter.as_mut(), &mut view, "filter-1")?;

    assert!(
        rendered
            .html
            .contains("<div class=\"catalog-filter-supplier\"><fieldset class=\"catalog-filter-supplier\"")
    );
    // the sections without the local decorator stay unwrapped
    assert!(!rendered.html.contains("<div class=\"catalog-filter-search\">"));
    Ok(())
}
