pub mod browse_books_cmd;
