use crate::token::ClientToken;

/// Fixed size ring of tokens received from one origin.
///
/// `cursor` points at the slot the next token is written to, so the newest
/// live token always sits right behind it.
pub struct SingleOriginTokens {
    tokens: Vec<Option<ClientToken>>,
    cursor: usize,
    len: usize,
}

impl SingleOriginTokens {
    pub fn new(size: usize) -> SingleOriginTokens {
        SingleOriginTokens {
            tokens: vec![None; size],
            cursor: 0,
            len: 0,
        }
    }

    pub fn insert(&mut self, token: ClientToken) {
        self.tokens[self.cursor] = Some(token);
        self.cursor = self.index(self.cursor + 1);
        self.len = (self.len + 1).min(self.tokens.len());
    }

    /// The newest token, left in place.
    pub fn peek(&self) -> Option<&ClientToken> {
        if self.len == 0 {
            return None;
        }
        self.tokens[self.index(self.cursor + self.tokens.len() - 1)].as_ref()
    }

    /// Remove the newest token.
    pub fn pop(&mut self) -> Option<ClientToken> {
        if self.len == 0 {
            return None;
        }
        self.cursor = self.index(self.cursor + self.tokens.len() - 1);
        self.len -= 1;
        self.tokens[self.cursor].take()
    }

    pub fn count(&self) -> usize {
        self.len
    }

    /// Forget every token but keep the slots allocated.
    pub fn clear(&mut self) {
        for slot in self.tokens.iter_mut() {
            *slot = None;
        }
        self.cursor = 0;
        self.len = 0;
    }

    fn index(&self, i: usize) -> usize {
        i % self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::SingleOriginTokens;
    use crate::token::ClientToken;

    fn token(s: &str) -> ClientToken {
        ClientToken::from(s.as_bytes())
    }

    #[test]
    fn empty_holder_has_nothing_to_peek() {
        let mut tokens = SingleOriginTokens::new(3);
        assert_eq!(0, tokens.count());
        assert_eq!(None, tokens.peek());
        assert_eq!(None, tokens.pop());
    }

    #[test]
    fn peek_returns_the_newest_token() {
        let mut tokens = SingleOriginTokens::new(3);
        tokens.insert(token("t1"));
        tokens.insert(token("t2"));
        assert_eq!(Some(&token("t2")), tokens.peek());
        assert_eq!(2, tokens.count());
    }

    #[test]
    fn count_is_capped_and_oldest_token_is_overwritten() {
        let mut tokens = SingleOriginTokens::new(2);
        tokens.insert(token("t1"));
        tokens.insert(token("t2"));
        tokens.insert(token("t3"));
        assert_eq!(2, tokens.count());

        assert_eq!(Some(token("t3")), tokens.pop());
        assert_eq!(Some(token("t2")), tokens.pop());
        // t1 was overwritten by t3
        assert_eq!(None, tokens.pop());
        assert_eq!(0, tokens.count());
    }

    #[test]
    fn single_slot_holder_keeps_the_last_token() {
        let mut tokens = SingleOriginTokens::new(1);
        tokens.insert(token("t1"));
        tokens.insert(token("t2"));
        assert_eq!(1, tokens.count());
        assert_eq!(Some(&token("t2")), tokens.peek());
    }

    #[test]
    fn insert_after_pop_reuses_the_freed_slot() {
        let mut tokens = SingleOriginTokens::new(3);
        tokens.insert(token("t1"));
        tokens.insert(token("t2"));
        assert_eq!(Some(token("t2")), tokens.pop());
        tokens.insert(token("t3"));
        assert_eq!(2, tokens.count());
        assert_eq!(Some(token("t3")), tokens.pop());
        assert_eq!(Some(token("t1")), tokens.pop());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut tokens = SingleOriginTokens::new(3);
        tokens.insert(token("t1"));
        tokens.clear();
        assert_eq!(0, tokens.count());
        assert_eq!(None, tokens.peek());

        for i in 0..5 {
            tokens.insert(token(&format!("t{}", i)));
        }
        assert_eq!(3, tokens.count());
        assert_eq!(Some(&token("t4")), tokens.peek());
    }
}
