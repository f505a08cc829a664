include!("../../lib.rs");

use clap::{Parser, Subcommand};
use crate::cart::command::add_to_cart_cmd::{AddToCartCommand, AddToCartCommandRequest};
use crate::cart::command::clear_cart_cmd::{ClearCartCommand, ClearCartCommandRequest};
use crate::cart::command::get_cart_cmd::{GetCartCommand, GetCartCommandRequest};
use crate::cart::command::remove_from_cart_cmd::{RemoveFromCartCommand, RemoveFromCartCommandRequest};
use crate::cart::factory as cart_factory;
use crate::catalog::command::browse_books_cmd::{BrowseBooksCommand, BrowseBooksCommandRequest};
use crate::catalog::factory as catalog_factory;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::core::storefront::SortOrder;
use crate::utils::trace::setup_tracing;

#[derive(Parser)]
#[command(name = "storefront", about = "Browse the remote book catalog and stage a locally persisted cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse one page of the catalog
    Browse {
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Books per page (5, 10 or 20)
        #[arg(long, default_value_t = 5)]
        page_size: u32,
        /// Sort by title, asc or desc
        #[arg(long, default_value = "asc")]
        sort: String,
        /// Category filter, repeatable; no flag means all categories
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    /// Add a book to the cart
    Add {
        #[arg(long)]
        book_id: i64,
        #[arg(long)]
        price: f64,
    },
    /// Remove a book from the cart
    Remove {
        #[arg(long)]
        book_id: i64,
    },
    /// Empty the cart and its persisted copy
    Clear,
    /// Show cart line items and totals
    Cart,
}

#[tokio::main]
async fn main() -> Result<(), CommandError> {
    setup_tracing();

    let cli = Cli::parse();
    let config = Configuration::from_env();

    match cli.command {
        Commands::Browse { page, page_size, sort, categories } => {
            let svc = catalog_factory::create_catalog_service(&config).await;
            let req = BrowseBooksCommandRequest::new(
                page, page_size, SortOrder::from(sort), &categories);
            let res = BrowseBooksCommand::new(svc).execute(req).await?;
            for book in &res.books {
                println!("[{}] {} by {} ({}) - ${:.2}",
                         book.book_id, book.title, book.author, book.category, book.price);
            }
            println!("Page {} of {} ({} books){}{}",
                     page, res.total_pages, res.total_books,
                     if res.has_previous { "" } else { " [first]" },
                     if res.has_next { "" } else { " [last]" });
        }
        Commands::Add { book_id, price } => {
            let svc = cart_factory::create_cart_service(&config, RepositoryStore::LocalFile).await;
            let res = AddToCartCommand::new(svc)
                .execute(AddToCartCommandRequest::new(book_id, price)).await?;
            println!("Book {} x{} in cart, {} items, total ${:.2}",
                     res.item.book_id, res.item.quantity, res.total_items, res.total_price);
        }
        Commands::Remove { book_id } => {
            let svc = cart_factory::create_cart_service(&config, RepositoryStore::LocalFile).await;
            let res = RemoveFromCartCommand::new(svc)
                .execute(RemoveFromCartCommandRequest { book_id }).await?;
            println!("{} items left, total ${:.2}", res.total_items, res.total_price);
        }
        Commands::Clear => {
            let svc = cart_factory::create_cart_service(&config, RepositoryStore::LocalFile).await;
            let _ = ClearCartCommand::new(svc).execute(ClearCartCommandRequest {}).await?;
            println!("Cart cleared");
        }
        Commands::Cart => {
            let svc = cart_factory::create_cart_service(&config, RepositoryStore::LocalFile).await;
            let res = GetCartCommand::new(svc).execute(GetCartCommandRequest {}).await?;
            if res.items.is_empty() {
                println!("Your cart is empty");
            } else {
                for item in &res.items {
                    println!("Book {} x{} @ ${:.2} = ${:.2}",
                             item.book_id, item.quantity, item.price, item.subtotal());
                }
                println!("{} items, total ${:.2}", res.total_items, res.total_price);
            }
        }
    }
    Ok(())
}
