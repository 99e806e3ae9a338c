//! Command runners.
//!
//! Every command follows the same loop: load the catalog, restore the saved
//! selection, apply one change, recompute, persist.
use crate::catalog::{load_catalog, Catalog};
use crate::cli::{CheckArgs, Command, GlobalArgs, NightsArgs, RootArgs, ShowArgs, TagArgs};
use crate::collate::CzechCollator;
use crate::compile::compile_selection;
use crate::group::group_and_sort;
use crate::render::{render_checklist, render_tags, ChecklistView};
use crate::selection::SelectionState;
use crate::store::{resolve_state_dir, StateStore};
use anyhow::{anyhow, Context, Result};

/// Catalog, store, and restored selection for one invocation.
pub struct ChecklistContext {
    pub catalog: Catalog,
    pub store: StateStore,
    pub state: SelectionState,
    pub collator: CzechCollator,
}

impl ChecklistContext {
    pub fn load(global: &GlobalArgs) -> Result<Self> {
        let catalog = load_catalog(&global.catalog).context("failed to load catalog")?;
        let state_dir = resolve_state_dir(global.state_dir.as_deref())?;
        let store = StateStore::in_dir(&state_dir);
        let state = store.load(&catalog);
        tracing::debug!(
            state = %store.path().display(),
            nights = state.nights(),
            tags = state.active_tags.len(),
            "selection restored"
        );
        Ok(Self {
            catalog,
            store,
            state,
            collator: CzechCollator::new()?,
        })
    }

    /// Recompute the checklist, persist the selection, and format the result.
    pub fn render(&self, show: &ShowArgs) -> Result<String> {
        let resolved = compile_selection(&self.catalog, &self.state);
        let groups = group_and_sort(resolved, &self.catalog.group_priorities, &self.collator);
        self.store.save(&self.state)?;
        if show.json {
            let view = ChecklistView::new(&self.state, &groups);
            let mut text =
                serde_json::to_string_pretty(&view).context("serialize checklist JSON")?;
            text.push('\n');
            return Ok(text);
        }
        Ok(render_checklist(&self.catalog, &self.state, &groups))
    }
}

pub fn run(args: RootArgs) -> Result<()> {
    let mut ctx = ChecklistContext::load(&args.global)?;
    match args.command {
        Command::Show(show) => run_show(&ctx, &show),
        Command::Tags => run_tags(&ctx),
        Command::Nights(nights) => run_nights(&mut ctx, &nights),
        Command::Tag(tag) => run_tag(&mut ctx, &tag),
        Command::Check(check) => run_check(&mut ctx, &check),
        Command::Reset(show) => run_reset(&mut ctx, &show),
    }
}

pub fn run_show(ctx: &ChecklistContext, show: &ShowArgs) -> Result<()> {
    print!("{}", ctx.render(show)?);
    Ok(())
}

pub fn run_tags(ctx: &ChecklistContext) -> Result<()> {
    print!("{}", render_tags(&ctx.catalog, &ctx.state));
    Ok(())
}

pub fn run_nights(ctx: &mut ChecklistContext, args: &NightsArgs) -> Result<()> {
    ctx.state.set_nights(args.nights);
    run_show(ctx, &args.show)
}

pub fn run_tag(ctx: &mut ChecklistContext, args: &TagArgs) -> Result<()> {
    if !ctx.catalog.has_tag(&args.id) {
        return Err(anyhow!("unknown tag id {:?}", args.id));
    }
    ctx.state.set_tag(&args.id, !args.off);
    run_show(ctx, &args.show)
}

/// Toggling a packed flag does not change the checklist, so it only persists.
pub fn run_check(ctx: &mut ChecklistContext, args: &CheckArgs) -> Result<()> {
    let label = ctx
        .catalog
        .items
        .iter()
        .find(|item| item.id == args.id)
        .map(|item| item.label.clone())
        .ok_or_else(|| anyhow!("unknown item id {:?}", args.id))?;
    ctx.state.set_checked(&args.id, !args.off);
    ctx.store.save(&ctx.state)?;
    let mark = if args.off { " " } else { "x" };
    println!("[{mark}] {label}");
    Ok(())
}

pub fn run_reset(ctx: &mut ChecklistContext, show: &ShowArgs) -> Result<()> {
    ctx.state.reset();
    ctx.store.clear()?;
    run_show(ctx, show)
}
