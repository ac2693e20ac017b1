impl<IN, SS> ReaderApp<IN, SS>
where
    IN: InputProvider,
    SS: SessionSink,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_command() {
                Ok(Some(command)) => self.apply_command(command, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("ui-input: provider error, skipping this poll");
                    break;
                }
            }
        }
    }

    /// Applies one command immediately, bypassing the input provider.
    pub fn apply_command(&mut self, command: Command, now_ms: u64) {
        match command {
            Command::Submit(text) => self.submit_text(&text),
            Command::TogglePlay => {
                if self.playback.toggle_play(now_ms) {
                    self.pending_redraw = true;
                }
            }
            Command::Seek(percent) => {
                if self.playback.is_empty() {
                    return;
                }
                self.playback.seek(percent, now_ms);
                self.refresh_display();
            }
            Command::Restart => {
                if self.playback.is_empty() {
                    return;
                }
                self.report_session();
                self.playback.restart(now_ms);
                self.refresh_display();
            }
            Command::Close => self.close_text(),
            Command::SetWpm(wpm) => self.set_wpm(wpm),
            Command::StepWpm(increase) => {
                let current = self.playback.settings().wpm;
                let next = if increase {
                    current.saturating_add(self.config.wpm_step)
                } else {
                    current.saturating_sub(self.config.wpm_step)
                };
                self.set_wpm(next);
            }
            Command::SetChunkMode(enabled) => {
                if self.playback.settings().chunk_mode != enabled {
                    debug!("ui-settings: chunk_mode={}", enabled);
                    self.playback.set_chunk_mode(enabled);
                    self.refresh_display();
                }
            }
            Command::SetChunkSize(size) => {
                let size = self.config.clamp_chunk_size(size);
                if self.playback.settings().chunk_size != size {
                    debug!("ui-settings: chunk_size={}", size);
                    self.playback.set_chunk_size(size);
                    self.refresh_display();
                }
            }
            Command::SetBionic(enabled) => {
                self.view.bionic = enabled;
                self.pending_redraw = true;
            }
            Command::SetPeripheral(enabled) => {
                self.view.peripheral = enabled;
                self.refresh_display();
            }
            Command::SetContext(enabled) => {
                if self.view.context != enabled {
                    debug!("ui-settings: context={}", enabled);
                    self.view.context = enabled;
                    self.pending_redraw = true;
                }
            }
        }
    }

    fn set_wpm(&mut self, wpm: u16) {
        let wpm = self.config.clamp_wpm(wpm);
        if self.playback.settings().wpm != wpm {
            debug!("ui-settings: wpm={}", wpm);
            self.playback.set_wpm(wpm);
            self.pending_redraw = true;
        }
    }
}
