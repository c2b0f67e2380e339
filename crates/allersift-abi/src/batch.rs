//! Forward-pass batch construction.
//!
//! A batch is the unit of work handed to the backend's decode primitive:
//! an ordered list of (token, position, sequence id, emit-logits) tuples.
//! Prefill builds one batch covering the whole prompt with logits requested
//! only on the last entry; the decode loop builds single-token continuation
//! batches whose position/sequence bookkeeping lives in [`DecodeCursor`]
//! rather than being inferred from prior call state.

use crate::token::Token;

/// One (token, position, sequence, logits) tuple inside a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchItem {
    pub token: Token,
    pub pos: i32,
    pub seq_id: i32,
    /// Request logits for this position after the forward pass.
    pub logits: bool,
}

/// Ordered token batch for one forward pass. Owned by the stage that builds
/// it and consumed by a single `SlmBackend::decode` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    items: Vec<BatchItem>,
}

impl Batch {
    /// Prefill batch over the whole prompt: position `i` for the i-th token,
    /// a single shared sequence, logits on exactly the last entry.
    pub fn prefill(tokens: &[Token], seq_id: i32) -> Self {
        let last = tokens.len().saturating_sub(1);
        let items = tokens
            .iter()
            .enumerate()
            .map(|(i, &token)| BatchItem {
                token,
                pos: i as i32,
                seq_id,
                logits: i == last,
            })
            .collect();
        Self { items }
    }

    /// Single-token continuation batch at the cursor's next position.
    /// Always requests logits (there is only one entry).
    pub fn continuation(cursor: &DecodeCursor, token: Token) -> Self {
        Self {
            items: vec![BatchItem {
                token,
                pos: cursor.next_pos(),
                seq_id: cursor.seq_id(),
                logits: true,
            }],
        }
    }

    #[inline]
    pub fn items(&self) -> &[BatchItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Explicit position/sequence bookkeeping for continuation batches.
///
/// `next_pos` doubles as the cumulative consumed-position count: prefill
/// advances it past the prompt, and every decoded continuation batch
/// advances it by that batch's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeCursor {
    next_pos: i32,
    seq_id: i32,
}

impl DecodeCursor {
    /// Cursor positioned just past a prompt of `prompt_len` tokens, on
    /// sequence 0.
    pub fn after_prompt(prompt_len: usize) -> Self {
        Self {
            next_pos: prompt_len as i32,
            seq_id: 0,
        }
    }

    /// Advance by the size of a batch that was just decoded.
    #[inline]
    pub fn advance(&mut self, batch_len: usize) {
        self.next_pos += batch_len as i32;
    }

    /// Total positions consumed so far (prompt included).
    #[inline]
    pub fn consumed(&self) -> usize {
        self.next_pos as usize
    }

    #[inline]
    pub fn next_pos(&self) -> i32 {
        self.next_pos
    }

    #[inline]
    pub fn seq_id(&self) -> i32 {
        self.seq_id
    }
}
