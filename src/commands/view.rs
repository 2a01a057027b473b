use crate::{
    catalog::Catalog,
    cli::ViewArgs,
    constants::PROGRESS_BAR_WIDTH,
    core::{
        display::{card_fields, record_progress_bar},
        paginate::PageSlice,
    },
    io::dataset::JsonFileSource,
    utils::util::Result,
};
use std::io::{self, Write};

pub fn view(args: ViewArgs) -> Result<()> {
    let config = args.catalog_config()?;
    let source = JsonFileSource::new(&args.dataset.dataset);
    let mut catalog = Catalog::load(&source, config)?;
    for navigation in args.navigation() {
        catalog.navigate(navigation);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_page(&mut out, &catalog.page(), &catalog.config().placeholder_image_url)?;
    out.flush()?;
    Ok(())
}

/// Renders a page of option cards followed by the page indicator.
pub fn write_page<W: Write>(
    out: &mut W,
    page: &PageSlice<'_>,
    placeholder_image_url: &str,
) -> Result<()> {
    let label_width = 18;
    for record in page.visible {
        writeln!(out, "{}", record.image_or(placeholder_image_url))?;
        for (label, value) in card_fields(record) {
            writeln!(out, "  {label:<label_width$} | {value}")?;
        }
        writeln!(
            out,
            "  {:<label_width$} | {}",
            "Progress",
            record_progress_bar(record, PROGRESS_BAR_WIDTH)
        )?;
        writeln!(out)?;
    }
    writeln!(out, "Page {} of {}", page.page, page.page_count)?;
    Ok(())
}
