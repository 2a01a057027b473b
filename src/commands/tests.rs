use super::{export, write_page};
use crate::{
    catalog::{Catalog, CatalogConfig},
    cli::{Cli, Command, ExportArgs, ViewArgs},
    constants::PLACEHOLDER_IMAGE_URL,
    core::paginate::Navigation,
    io::dataset::JsonFileSource,
    utils::util::init_logger,
};
use clap::Parser;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

const DATASET: &str = r#"[
  {"division": "KIDS-A", "group_section": "G", "department": "D", "sub_department": "S",
   "gate_date": "2024-01-01", "style_number": "K-1", "colour": "Red", "product_type": "Tee",
   "order_qty": 300, "store_launch_week": 12, "CurrenStatus": "IN CUTTING",
   "Product_Reference": "PR-K1"},
  {"division": "MENS-B", "group_section": "G", "department": "D", "sub_department": "S",
   "gate_date": "2023-01-01", "style_number": "M-1", "colour": "Blue, Light", "product_type": "Shirt",
   "order_qty": 1200, "store_launch_week": 30, "CurrenStatus": "WAREHOUSE",
   "image": "https://cdn.example/m1.png", "Product_Reference": "PR-M1"},
  {"division": "WOMENS-C", "group_section": "G", "department": "D", "sub_department": "S",
   "gate_date": "2025-01-01T00:00:00Z", "style_number": "W-1", "product_type": "Dress",
   "order_qty": 80, "CurrenStatus": "IN SELECTION", "Product_Reference": "PR-W1"}
]"#;

fn write_dataset(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("test dataset should be writable");
    path
}

fn parse_view_args(args: &[&str]) -> ViewArgs {
    match Cli::try_parse_from(args).expect("CLI parse should succeed").command {
        Command::View(args) => args,
        other => panic!("expected view command, got {}", other.name()),
    }
}

fn parse_export_args(args: &[&str]) -> ExportArgs {
    match Cli::try_parse_from(args).expect("CLI parse should succeed").command {
        Command::Export(args) => args,
        other => panic!("expected export command, got {}", other.name()),
    }
}

fn render(catalog: &Catalog) -> String {
    let mut out = Vec::new();
    write_page(
        &mut out,
        &catalog.page(),
        &catalog.config().placeholder_image_url,
    )
    .expect("page should render");
    String::from_utf8(out).expect("rendered page should be UTF-8")
}

#[test]
fn view_args_parse_defaults_and_navigation() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let dataset = write_dataset(&dir, "options.json", DATASET);
    let dataset = dataset.to_string_lossy().into_owned();

    let args = parse_view_args(&["gatein", "view", "--dataset", &dataset]);
    assert_eq!(args.page_size, 52);
    assert_eq!(args.page, None);
    assert!(args.navigation().is_empty());
    assert_eq!(args.dataset.placeholder_image_url, PLACEHOLDER_IMAGE_URL);

    let args = parse_view_args(&[
        "gatein",
        "-vv",
        "view",
        "--dataset",
        &dataset,
        "--page-size",
        "2",
        "--nav",
        "last",
        "--nav",
        "prev",
    ]);
    assert_eq!(args.page_size, 2);
    assert_eq!(args.navigation(), vec![Navigation::Last, Navigation::Prev]);

    let args = parse_view_args(&["gatein", "view", "--dataset", &dataset, "--page", "-1"]);
    assert_eq!(args.page, Some(-1));
    assert_eq!(args.navigation(), vec![Navigation::Goto(-1)]);
}

fn load_for_view(args: &ViewArgs) -> Catalog {
    let config = args.catalog_config().expect("config should be valid");
    let mut catalog = Catalog::load(&JsonFileSource::new(&args.dataset.dataset), config)
        .expect("catalog should load");
    for navigation in args.navigation() {
        catalog.navigate(navigation);
    }
    catalog
}

#[test]
fn view_page_and_nav_options_select_the_page() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let dataset = write_dataset(&dir, "options.json", DATASET);
    let dataset = dataset.to_string_lossy().into_owned();

    let by_nav = parse_view_args(&[
        "gatein", "view", "--dataset", &dataset, "--page-size", "2", "--nav", "last",
    ]);
    assert!(render(&load_for_view(&by_nav)).ends_with("Page 2 of 2\n"));

    let by_number = parse_view_args(&[
        "gatein", "view", "--dataset", &dataset, "--page-size", "2", "--page", "2",
    ]);
    assert!(render(&load_for_view(&by_number)).contains("K-1"));

    let out_of_range = parse_view_args(&[
        "gatein", "view", "--dataset", &dataset, "--page-size", "2", "--page", "9",
    ]);
    assert!(render(&load_for_view(&out_of_range)).ends_with("Page 1 of 2\n"));
}

#[test]
fn cli_rejects_invalid_arguments() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let dataset = write_dataset(&dir, "options.json", DATASET);
    let dataset = dataset.to_string_lossy().into_owned();

    assert!(Cli::try_parse_from(["gatein", "view", "--dataset", "/no/such/file.json"]).is_err());
    assert!(
        Cli::try_parse_from(["gatein", "view", "--dataset", dataset.as_str(), "--page-size", "0"])
            .is_err()
    );
    assert!(
        Cli::try_parse_from(["gatein", "view", "--dataset", dataset.as_str(), "--page", "sideways"])
            .is_err()
    );
    assert!(
        Cli::try_parse_from(["gatein", "view", "--dataset", dataset.as_str(), "--nav", "3"])
            .is_err()
    );
    assert!(Cli::try_parse_from([
        "gatein",
        "view",
        "--dataset",
        dataset.as_str(),
        "--page",
        "2",
        "--nav",
        "next"
    ])
    .is_err());
    assert!(Cli::try_parse_from([
        "gatein",
        "export",
        "--dataset",
        dataset.as_str(),
        "--output-dir",
        "/no/such/dir"
    ])
    .is_err());
}

#[test]
fn view_renders_cards_in_catalog_order() {
    init_logger();
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let dataset = write_dataset(&dir, "options.json", DATASET);
    let dataset = dataset.to_string_lossy().into_owned();
    let args = parse_view_args(&["gatein", "view", "--dataset", &dataset, "--page-size", "2"]);

    let config = args.catalog_config().expect("config should be valid");
    let catalog = Catalog::load(&JsonFileSource::new(&args.dataset.dataset), config)
        .expect("catalog should load");
    let rendered = render(&catalog);

    let mens = rendered.find("M-1").expect("MENS card should render");
    let womens = rendered.find("W-1").expect("WOMENS card should render");
    assert!(mens < womens);
    assert!(!rendered.contains("K-1"));
    assert!(rendered.contains("https://cdn.example/m1.png"));
    assert!(rendered.contains(PLACEHOLDER_IMAGE_URL));
    assert!(rendered.contains("01-01-2023"));
    assert!(rendered.contains("01-01-2025"));
    assert!(rendered.contains("100%"));
    assert!(rendered.ends_with("Page 1 of 2\n"));
}

#[test]
fn view_navigation_reaches_last_page() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let dataset = write_dataset(&dir, "options.json", DATASET);
    let config = CatalogConfig::new(2, PLACEHOLDER_IMAGE_URL).expect("config should be valid");
    let mut catalog =
        Catalog::load(&JsonFileSource::new(&dataset), config).expect("catalog should load");

    assert!(catalog.navigate(Navigation::Next));
    assert!(!catalog.navigate(Navigation::Next));
    assert!(!catalog.navigate(Navigation::Goto(3)));
    let rendered = render(&catalog);
    assert!(rendered.contains("K-1"));
    assert!(rendered.contains("[########------------]  40%"));
    assert!(rendered.ends_with("Page 2 of 2\n"));
}

#[test]
fn export_writes_csv_in_display_order() {
    init_logger();
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let dataset = write_dataset(&dir, "options.json", DATASET);
    let out_dir = tempfile::tempdir().expect("output dir should be created");
    let args = parse_export_args(&[
        "gatein",
        "export",
        "--dataset",
        &dataset.to_string_lossy(),
        "-o",
        &out_dir.path().to_string_lossy(),
    ]);

    export(args).expect("export should succeed");

    let content = fs::read_to_string(out_dir.path().join("GateIn_Options.csv"))
        .expect("export file should exist");
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Product Reference,Image URL,Style Number,Colour,Product Type,Order Qty,Store Launch Week,Gate Entry Date,Current Status"
    );
    assert_eq!(
        lines[1],
        "PR-M1,https://cdn.example/m1.png,M-1,\"Blue, Light\",Shirt,1200,30,2023-01-01,WAREHOUSE"
    );
    assert_eq!(
        lines[2],
        format!("PR-W1,{PLACEHOLDER_IMAGE_URL},W-1,,Dress,80,,2025-01-01T00:00:00Z,IN SELECTION")
    );
    assert!(lines[3].starts_with("PR-K1,"));
}

#[test]
fn export_of_empty_dataset_writes_no_file() {
    init_logger();
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let dataset = write_dataset(&dir, "empty.json", "[]");
    let out_dir = tempfile::tempdir().expect("output dir should be created");
    let args = parse_export_args(&[
        "gatein",
        "export",
        "--dataset",
        &dataset.to_string_lossy(),
        "--output-dir",
        &out_dir.path().to_string_lossy(),
    ]);

    export(args).expect("empty export should not fail");
    assert!(!out_dir.path().join("GateIn_Options.csv").exists());
}

#[test]
fn export_fails_on_record_without_division() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let dataset = write_dataset(&dir, "broken.json", r#"[{"style_number": "X-1"}]"#);
    let out_dir = tempfile::tempdir().expect("output dir should be created");
    let args = parse_export_args(&[
        "gatein",
        "export",
        "--dataset",
        &dataset.to_string_lossy(),
        "--output-dir",
        &out_dir.path().to_string_lossy(),
    ]);

    let err = export(args).unwrap_err();
    assert!(err.to_string().contains("X-1"));
    assert!(!out_dir.path().join("GateIn_Options.csv").exists());
}
