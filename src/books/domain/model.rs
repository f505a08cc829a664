use serde::{Deserialize, Serialize};

// Book is the read model served by the remote catalog; the client never
// mutates one and the list is replaced wholesale on every page fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Book {
    #[serde(rename = "bookID")]
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub classification: String,
    pub category: String,
    pub page_count: u32,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Book;

    #[tokio::test]
    async fn test_should_parse_catalog_wire_names() {
        let raw = r#"{
            "bookID": 7,
            "title": "The Pragmatic Bookseller",
            "author": "J. Doe",
            "publisher": "Acme Press",
            "isbn": "978-0000000000",
            "classification": "Non-Fiction",
            "category": "Business",
            "pageCount": 312,
            "price": 12.5
        }"#;
        let book: Book = serde_json::from_str(raw).expect("should parse book");
        assert_eq!(7, book.book_id);
        assert_eq!("The Pragmatic Bookseller", book.title.as_str());
        assert_eq!(312, book.page_count);
        assert_eq!(12.5, book.price);
    }

    #[tokio::test]
    async fn test_should_round_trip_book() {
        let book = Book {
            book_id: 1,
            title: "title".to_string(),
            author: "author".to_string(),
            publisher: "publisher".to_string(),
            isbn: "isbn".to_string(),
            classification: "classification".to_string(),
            category: "Fiction".to_string(),
            page_count: 100,
            price: 9.99,
        };
        let raw = serde_json::to_string(&book).expect("should serialize book");
        assert!(raw.contains("\"bookID\":1"));
        assert!(raw.contains("\"pageCount\":100"));
        let parsed: Book = serde_json::from_str(raw.as_str()).expect("should parse book");
        assert_eq!(book, parsed);
    }
}
