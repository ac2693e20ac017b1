impl<IN, SS> ReaderApp<IN, SS>
where
    IN: InputProvider,
    SS: SessionSink,
{
    pub fn new(input: IN, sessions: SS, config: ReaderConfig) -> Self {
        let config = config.normalized();
        let playback = PlaybackController::new(
            PlaybackSettings {
                wpm: config.wpm,
                chunk_mode: config.chunk_mode,
                chunk_size: config.chunk_size,
            },
            config.delay,
        );

        Self {
            input,
            sessions,
            config,
            playback,
            view: ViewOptions {
                bionic: config.bionic,
                peripheral: config.peripheral,
                context: config.context,
            },
            display: DisplayBuffer::default(),
            pending_redraw: true,
            sessions_reported: 0,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        let position = self.playback.position();
        let ticked = self.playback.tick(now_ms);
        if self.playback.position() != position {
            self.refresh_display();
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            return TickResult::RenderRequested;
        }
        ticked
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let wpm = self.playback.settings().wpm;
        if self.playback.is_empty() {
            f(Screen::Idle { wpm });
            return;
        }

        let finished = self.playback.is_finished();
        let text = if finished {
            FINISHED_TEXT
        } else {
            self.display.current.as_str()
        };

        let total = self.playback.len();
        let mut counter_buf = [0u8; 48];
        let mut elapsed_buf = [0u8; 12];
        let counter = counter_label(
            (self.playback.position() + 1).min(total),
            total,
            &mut counter_buf,
        );
        let elapsed = elapsed_label(self.playback.elapsed_secs(), &mut elapsed_buf);

        f(Screen::Reading {
            text,
            orp: orp_split(text),
            bionic: self.view.bionic,
            prev: self.display.prev.as_deref(),
            next: self.display.next.as_deref(),
            paused: !self.playback.is_playing(),
            finished,
            wpm,
            progress_pct: self.playback.progress_percent(),
            words_left: self.playback.words_left(),
            counter,
            elapsed,
            context: self
                .view
                .context
                .then(|| ContextView::new(self.playback.sequence(), self.playback.position())),
        });
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn with_sessions_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut SS) -> R,
    {
        f(&mut self.sessions)
    }

    /// Number of sessions handed to the sink so far.
    pub fn sessions_reported(&self) -> u32 {
        self.sessions_reported
    }

    pub fn persisted_settings(&self) -> PersistedSettings {
        let settings = self.playback.settings();
        PersistedSettings {
            wpm: settings.wpm,
            chunk_mode: settings.chunk_mode,
            chunk_size: settings.chunk_size,
            bionic: self.view.bionic,
            peripheral: self.view.peripheral,
            context: self.view.context,
        }
    }

    pub fn apply_persisted_settings(&mut self, settings: PersistedSettings) {
        self.playback.set_wpm(self.config.clamp_wpm(settings.wpm));
        self.playback.set_chunk_mode(settings.chunk_mode);
        self.playback
            .set_chunk_size(self.config.clamp_chunk_size(settings.chunk_size));
        self.view = ViewOptions {
            bionic: settings.bionic,
            peripheral: settings.peripheral,
            context: settings.context,
        };
        self.refresh_display();
    }
}
