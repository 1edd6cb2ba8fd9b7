use tracing::debug;

use crate::{
    bitmap::Bitmap, visitor::Visitor, Containment, ContainmentQuery, Corpus, TransactionId,
};

/// One bitmap per transaction, bit `i` set iff the transaction holds item
/// `i`. Every bitmap shares the corpus wide width of largest item + 1.
#[derive(Debug, Clone, Default)]
pub struct SignatureIndex {
    signatures: Vec<Bitmap>,
    width: usize,
}

impl SignatureIndex {
    pub fn build(corpus: &Corpus) -> Self {
        let width = corpus.max_item().map(|max| max as usize + 1).unwrap_or(0);

        let signatures: Vec<Bitmap> = corpus
            .sets()
            .iter()
            .map(|set| Bitmap::from_positions(width, set.iter().copied()))
            .collect();

        debug!(transactions = signatures.len(), width, "built signature index");
        Self { signatures, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn signature(&self, id: TransactionId) -> &Bitmap {
        &self.signatures[id as usize]
    }

    pub fn signatures(&self) -> &[Bitmap] {
        &self.signatures
    }
}

impl Containment for SignatureIndex {
    fn name(&self) -> &'static str {
        "signature"
    }

    fn visit_matches(&self, query: &ContainmentQuery, visitor: &mut dyn Visitor<TransactionId>) {
        if query.is_empty() {
            return;
        }
        for (id, signature) in self.signatures.iter().enumerate() {
            if signature.contains_all(query) {
                visitor.visit(id as TransactionId);
            }
        }
    }
}
