use serde::{Deserialize, Serialize};

// CartItem is one line of the locally staged cart. The price is a snapshot
// taken at the time of the last add, not a live catalog value, and there is
// at most one entry per distinct book identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CartItem {
    #[serde(rename = "bookID")]
    pub book_id: i64,
    pub quantity: u32,
    pub price: f64,
}

impl CartItem {
    pub fn new(book_id: i64, price: f64) -> Self {
        Self {
            book_id,
            quantity: 1,
            price,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
