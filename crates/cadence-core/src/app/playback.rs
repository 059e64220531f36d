impl PlaybackState {
    fn play(mut self) -> (Self, Vec<Effect>) {
        let schedule = match self.book.as_ref() {
            Some(book) if !book.is_final_position(self.position) => {
                self.schedule_for(self.position)
            }
            _ => None,
        };

        // No book, an empty book, or already at the final token.
        let Some(schedule) = schedule else {
            return (self, Vec::new());
        };

        self.playing = true;
        (self, vec![schedule])
    }

    fn pause(mut self) -> (Self, Vec<Effect>) {
        self.playing = false;
        (self, vec![Effect::CancelScheduled])
    }

    fn next_token(mut self) -> (Self, Vec<Effect>) {
        let next = match self.book.as_ref() {
            Some(book) => book.next_position(self.position),
            None => return (self, Vec::new()),
        };

        let Some(next) = next else {
            // End of book: stop without moving. Not an error.
            self.playing = false;
            return (self, vec![Effect::CancelScheduled]);
        };

        self.move_to(next)
    }

    fn previous_token(mut self) -> (Self, Vec<Effect>) {
        let previous = match self.book.as_ref() {
            Some(book) => book.previous_position(self.position),
            None => return (self, Vec::new()),
        };

        let Some(previous) = previous else {
            // Clamped at the very first token.
            return (self, Vec::new());
        };

        self.move_to(previous)
    }

    /// Shared step transition: adopt the new position, recompute pace,
    /// re-schedule while playing, persist progress.
    fn move_to(mut self, position: Position) -> (Self, Vec<Effect>) {
        self.position = position;
        self.refresh_pace();

        let mut effects = Vec::new();
        if self.playing {
            if let Some(schedule) = self.schedule_for(position) {
                effects.push(schedule);
            }
        }
        effects.push(self.persist_progress());
        (self, effects)
    }
}
