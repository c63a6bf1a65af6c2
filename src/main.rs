use board_core::configuration::get_configuration;
use board_core::listing::to_display_page;
use board_core::pagination::{PageState, PagerItem, WindowPolicy, pager_items};
use board_core::telemetry::{get_subscriber, init_subscriber};

/// Dev tool: prints the pager line for a current/total page pair, using
/// the configured window size and policy.
///
/// Usage: `board-pager [current] [total]` (0-based current, defaults 0 12).
fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("board_pager".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");

    let mut args = std::env::args().skip(1);
    let current: usize = args.next().map(|arg| arg.parse()).transpose()?.unwrap_or(0);
    let total: usize = args.next().map(|arg| arg.parse()).transpose()?.unwrap_or(12);

    let state = PageState::new(current, total, configuration.listing.page_size)?;
    tracing::info!(
        "Rendering pager for page {} of {}",
        current,
        total
    );
    println!(
        "{}",
        render_line(
            &state,
            configuration.pager.policy,
            configuration.pager.window_size
        )
    );
    Ok(())
}

fn render_line(state: &PageState, policy: WindowPolicy, window_size: usize) -> String {
    let items: Vec<String> = pager_items(state, policy, window_size)
        .into_iter()
        .map(|item| match item {
            PagerItem::First => "\u{ab}".to_string(),
            PagerItem::Prev => "\u{2039}".to_string(),
            PagerItem::Page {
                index,
                current: true,
            } => format!("[{}]", to_display_page(index)),
            PagerItem::Page { index, .. } => to_display_page(index).to_string(),
            PagerItem::Next => "\u{203a}".to_string(),
            PagerItem::Last => "\u{bb}".to_string(),
        })
        .collect();
    items.join(" ")
}
