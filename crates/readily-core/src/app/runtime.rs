impl<IN, SS> ReaderApp<IN, SS>
where
    IN: InputProvider,
    SS: SessionSink,
{
    fn submit_text(&mut self, text: &str) {
        let sequence = tokenize(text);
        if sequence.is_empty() {
            debug!("ui-input: ignored blank submission");
            return;
        }

        if !self.playback.is_empty() {
            self.playback.pause();
            self.report_session();
        }
        self.playback.load(sequence);
        self.refresh_display();
    }

    fn close_text(&mut self) {
        if self.playback.is_empty() {
            return;
        }

        self.playback.pause();
        self.report_session();
        self.playback.unload();
        self.refresh_display();
    }

    /// Hands the current run to the session sink when it lasted long enough.
    /// Sink failures are logged and dropped.
    fn report_session(&mut self) {
        let record = self.playback.session_record();
        if !record.is_reportable() {
            debug!(
                "session: skipped duration_s={} words={}",
                record.duration_seconds, record.word_count
            );
            return;
        }

        match self.sessions.record(&record) {
            Ok(()) => {
                self.sessions_reported = self.sessions_reported.saturating_add(1);
                debug!(
                    "session: recorded duration_s={} words={} wpm={}",
                    record.duration_seconds, record.word_count, record.wpm
                );
            }
            Err(_) => {
                warn!(
                    "session: sink rejected record duration_s={} words={}",
                    record.duration_seconds, record.word_count
                );
            }
        }
    }

    fn refresh_display(&mut self) {
        let position = self.playback.position();
        self.display.current = self.playback.chunk_text(position).unwrap_or_default();

        if self.view.peripheral {
            self.display.prev = self.playback.prev_chunk_text();
            self.display.next = self.playback.next_chunk_text();
        } else {
            self.display.prev = None;
            self.display.next = None;
        }

        self.pending_redraw = true;
    }
}
