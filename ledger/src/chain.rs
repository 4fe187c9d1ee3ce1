//! The append-only block sequence and its integrity check.

use crate::block::Block;
use crate::error::LedgerError;
use permchain_types::BlockHash;

/// Ordered blocks, genesis first.
#[derive(Clone, Debug, Default)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// A chain holding only the genesis block.
    pub fn with_genesis() -> Self {
        Self {
            blocks: vec![Block::genesis()],
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn head(&self) -> Result<&Block, LedgerError> {
        self.blocks.last().ok_or(LedgerError::EmptyLedger)
    }

    /// Stored hash of the head block.
    pub fn head_hash(&self) -> Result<BlockHash, LedgerError> {
        let head = self.head()?;
        head.hash.ok_or_else(|| LedgerError::ChainCorrupted {
            block_id: head.id,
            reason: "head block has no hash".into(),
        })
    }

    /// Append without any validation.
    pub fn push(&mut self, block: Block) -> &Block {
        self.blocks.push(block);
        &self.blocks[self.blocks.len() - 1]
    }

    /// Walk every block after genesis and check its stored hash and its link
    /// to the predecessor. Signatures are not re-verified.
    pub fn verify_integrity(&self) -> Result<(), LedgerError> {
        for pair in self.blocks.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.hash != Some(current.compute_hash()) {
                return Err(LedgerError::ChainCorrupted {
                    block_id: current.id,
                    reason: "hash does not match contents".into(),
                });
            }
            if previous.hash != Some(current.previous_hash) {
                return Err(LedgerError::ChainCorrupted {
                    block_id: current.id,
                    reason: "previous hash does not match predecessor".into(),
                });
            }
        }
        Ok(())
    }
}
