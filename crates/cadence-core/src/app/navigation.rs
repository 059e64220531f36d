impl PlaybackState {
    fn jump_to_chapter(mut self, index: u32) -> (Self, Vec<Effect>) {
        let target = match self.book.as_ref() {
            Some(book) => book.clamp_position(Position::new(index, 0)),
            None => return (self, Vec::new()),
        };

        debug!(
            "playback: jump to chapter {} (requested {})",
            target.chapter, index
        );
        self.position = Position::new(target.chapter, 0);
        self.playing = false;
        self.refresh_pace();

        let persist = self.persist_progress();
        (self, vec![Effect::CancelScheduled, persist])
    }

    fn seek_within_chapter(mut self, fraction: f32) -> (Self, Vec<Effect>) {
        let len = match self.book.as_ref() {
            Some(book) => book
                .chapter(self.position.chapter)
                .map_or(0, |chapter| chapter.token_count()),
            None => return (self, Vec::new()),
        };

        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let token = if len == 0 {
            0
        } else {
            ((fraction * len as f32).floor() as u32).min(len - 1)
        };

        debug!(
            "playback: seek chapter {} fraction {:.3} -> token {}",
            self.position.chapter, fraction, token
        );
        self.position = Position::new(self.position.chapter, token);
        self.playing = false;
        self.refresh_pace();

        let persist = self.persist_progress();
        (self, vec![Effect::CancelScheduled, persist])
    }

    fn update_setting(mut self, change: SettingChange) -> (Self, Vec<Effect>) {
        debug!("playback: apply setting {change:?}");
        self.settings.apply(change);
        self.refresh_pace();
        let settings = self.settings;
        (self, vec![Effect::PersistSettings(settings)])
    }

    fn load_book(mut self, book: Book) -> (Self, Vec<Effect>) {
        debug!(
            "playback: load book {:?} with {} chapters",
            book.metadata.title,
            book.chapters.len()
        );
        self.position = book.start_position();
        self.book = Some(book);
        self.playing = false;
        self.refresh_pace();
        (self, vec![Effect::CancelScheduled])
    }

    /// Adopt a position read back from storage. Deliberately emits no
    /// persist-progress effect: writing back a value just read would be
    /// redundant.
    fn restore_position(mut self, position: Position) -> (Self, Vec<Effect>) {
        let clamped = match self.book.as_ref() {
            Some(book) => book.clamp_position(position),
            None => return (self, Vec::new()),
        };

        debug!(
            "playback: restore position chapter {} token {}",
            clamped.chapter, clamped.token
        );
        self.position = clamped;
        self.refresh_pace();
        (self, Vec::new())
    }

    fn restart_book(mut self) -> (Self, Vec<Effect>) {
        let start = match self.book.as_ref() {
            Some(book) => book.start_position(),
            None => return (self, Vec::new()),
        };

        debug!("playback: restart from chapter {}", start.chapter);
        self.position = start;
        self.playing = false;
        self.refresh_pace();

        let persist = self.persist_progress();
        (self, vec![Effect::CancelScheduled, persist])
    }
}
