use crate::engine::Engine;
use crate::params::AllParams;
use crate::store::AppStore;
use anyhow::Result;

/// Working copy of the parameters edited in isolation from the committed,
/// live-affecting value. Edits never touch the store until [`save`]
/// succeeds; navigating away after [`reset`] is a lossless no-op.
///
/// [`save`]: SettingsDraft::save
/// [`reset`]: SettingsDraft::reset
pub struct SettingsDraft {
    snapshot: AllParams,
    draft: AllParams,
    base_rev: u64,
}

impl SettingsDraft {
    /// Baseline a new draft from the store's committed parameters.
    pub fn new(store: &AppStore) -> Self {
        let snapshot = store.params();
        Self {
            draft: snapshot.clone(),
            base_rev: store.params_rev(),
            snapshot,
        }
    }

    pub fn draft(&self) -> &AllParams {
        &self.draft
    }

    pub fn snapshot(&self) -> &AllParams {
        &self.snapshot
    }

    /// Dirty iff the draft differs structurally from the snapshot recorded
    /// at the last baseline.
    pub fn dirty(&self) -> bool {
        self.draft != self.snapshot
    }

    /// Apply a pure updater to the draft. The previous draft value is not
    /// mutated in place; dirtiness is recomputed structurally on read.
    pub fn update(&mut self, updater: impl FnOnce(AllParams) -> AllParams) {
        self.draft = updater(self.draft.clone());
    }

    /// Discard all edits since the last baseline.
    pub fn reset(&mut self) {
        self.draft = self.snapshot.clone();
    }

    /// Rebaseline if the committed parameters changed externally since this
    /// draft was last baselined. Returns true when a rebaseline happened.
    ///
    /// A save through [`save`](Self::save) records its own post-save
    /// revision, so it never triggers a rebaseline-from-self here.
    pub fn sync(&mut self, store: &AppStore) -> bool {
        let rev = store.params_rev();
        if rev == self.base_rev {
            return false;
        }
        tracing::debug!(
            from = self.base_rev,
            to = rev,
            "committed parameters changed externally, rebaselining draft"
        );
        self.snapshot = store.params();
        self.draft = self.snapshot.clone();
        self.base_rev = rev;
        true
    }

    /// Persist the draft to the engine, then commit it into the store and
    /// rebaseline. On engine failure nothing is committed and the draft
    /// stays dirty so the user can retry or discard explicitly; surfacing
    /// the error is the caller's job.
    pub fn save(&mut self, store: &AppStore, engine: &dyn Engine) -> Result<()> {
        engine.save_parameters(&self.draft)?;
        self.base_rev = store.set_params(self.draft.clone());
        self.snapshot = self.draft.clone();
        Ok(())
    }
}
