use super::*;

impl App {
    /// Runs the first action offered for the selected record.
    pub(super) fn run_default_action(&mut self) {
        let Some(record) = self.selected_record() else {
            return;
        };
        if let Some(action) = available_actions(&record, self.ctx.variant()).first().copied() {
            self.dispatch(action, record);
        }
    }

    pub(super) fn run_action(&mut self, action: AssetAction) {
        let Some(record) = self.selected_record() else {
            return;
        };
        if !available_actions(&record, self.ctx.variant()).contains(&action) {
            return;
        }
        self.dispatch(action, record);
    }

    fn dispatch(&mut self, action: AssetAction, record: AssetRecord) {
        let variant = self.ctx.variant();
        tracing::debug!(id = %record.id, ?action, "running action");

        if action.is_fetching() {
            self.pending_actions += 1;
            spawn_action(
                self.ctx.client.clone(),
                variant,
                action,
                record,
                self.tx.clone(),
            );
            return;
        }

        let browser = SystemBrowser;
        let notifier = ChannelNotifier::new(self.tx.clone());
        let mut dispatcher = ActionDispatcher::new(
            &mut self.clipboard,
            &browser,
            &notifier,
            &self.ctx.client,
            variant,
        );
        // Failures are already reported as notices.
        let _ = dispatcher.run(action, &record);
    }
}
