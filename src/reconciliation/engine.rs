use super::types::{EntryOutcome, MergedResult, ReconcileError, SnapshotProvider};
use crate::manifest::ManagedFileEntry;
use crate::merge::apply_strategy;
use tracing::{debug, warn};

/// Reconcile every manifest entry against its snapshot.
///
/// Entries are independent: a failure is recorded in that entry's outcome
/// and the remaining entries are still processed. No file is read or
/// written here; the provider supplies all inputs.
pub fn reconcile<P>(entries: &[ManagedFileEntry], provider: &P) -> Vec<EntryOutcome>
where
    P: SnapshotProvider + ?Sized,
{
    entries
        .iter()
        .map(|entry| {
            let result = reconcile_entry(entry, provider);

            match &result {
                Ok(merged) => debug!(
                    template = %entry.template_name,
                    strategy = %entry.strategy,
                    changed = merged.changed,
                    "Reconciled managed file"
                ),
                Err(e) => warn!(
                    template = %entry.template_name,
                    strategy = %entry.strategy,
                    error = %e,
                    "Failed to reconcile managed file"
                ),
            }

            EntryOutcome {
                template_name: entry.template_name.clone(),
                strategy: entry.strategy,
                result,
            }
        })
        .collect()
}

fn reconcile_entry<P>(entry: &ManagedFileEntry, provider: &P) -> Result<MergedResult, ReconcileError>
where
    P: SnapshotProvider + ?Sized,
{
    let snapshot = provider.snapshot(entry)?;
    let content = apply_strategy(
        entry.strategy,
        snapshot.existing_text.as_deref(),
        &snapshot.replacement_text,
    )?;

    let changed = snapshot
        .existing_text
        .as_deref()
        .map_or(true, |existing| existing != content);

    Ok(MergedResult {
        destination: snapshot.destination,
        content,
        changed,
    })
}
