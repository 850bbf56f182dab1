//! # Command Session
//!
//! A line-oriented stand-in for the storefront views. Each command reads
//! derived values from the stores or calls one of their mutators, the same
//! way the product list, cart and profile modules do.
//!
//! ## Command Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View            Command                 Store call                     │
//! │  ────            ───────                 ──────────                     │
//! │  Product list    products, search <q>    filtered_products, set_filter  │
//! │                  show <id>               select_product                 │
//! │                  add <id>                CartStore::add_item            │
//! │  Cart            cart                    items, total_items/price       │
//! │                  inc/dec <id>            update_quantity(qty ± 1)       │
//! │                  qty <id> <n>            update_quantity                │
//! │                  rm <id>, clear          remove_item, clear_cart        │
//! │  Profile         login, logout           AuthStore::login / logout      │
//! │                  profile, rename <name>  user_name/email, update_user   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use shophub_core::validation::validate_user;
use shophub_core::{CartItem, CoreError, Order, Product, Quantity, User, UserPatch};
use shophub_state::AppStores;
use tracing::debug;

use crate::config::ShellConfig;
use crate::error::{ShellError, ShellResult};
use crate::fixtures;

pub const HELP: &str = "\
Products:  products | search [text] | show <id> | add <id>
Cart:      cart | inc <id> | dec <id> | qty <id> <n> | rm <id> | clear
Profile:   login [email name...] | logout | profile | rename <name...>
Other:     help | quit";

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Products,
    /// Empty text clears the filter.
    Search(String),
    Show(String),
    Add(String),
    Increase(String),
    Decrease(String),
    SetQuantity { product_id: String, quantity: i64 },
    Remove(String),
    Clear,
    Cart,
    /// `None` signs in the demo user.
    Login(Option<(String, String)>),
    Logout,
    Profile,
    Rename(String),
    Quit,
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();
        let rest: Vec<&str> = words.collect();

        let id = |usage: &'static str| {
            rest.first()
                .map(|s| s.to_string())
                .ok_or(ShellError::Usage(usage))
        };

        let command = match verb.as_str() {
            "help" | "?" => Command::Help,
            "products" | "ls" => Command::Products,
            "search" => Command::Search(rest.join(" ")),
            "show" => Command::Show(id("show <product-id>")?),
            "add" => Command::Add(id("add <product-id>")?),
            "inc" => Command::Increase(id("inc <product-id>")?),
            "dec" => Command::Decrease(id("dec <product-id>")?),
            "qty" => match rest.as_slice() {
                [product_id, quantity] => Command::SetQuantity {
                    product_id: product_id.to_string(),
                    quantity: quantity
                        .parse()
                        .map_err(|_| ShellError::Usage("qty <product-id> <quantity>"))?,
                },
                _ => return Err(ShellError::Usage("qty <product-id> <quantity>")),
            },
            "rm" | "remove" => Command::Remove(id("rm <product-id>")?),
            "clear" => Command::Clear,
            "cart" => Command::Cart,
            "login" => match rest.as_slice() {
                [] => Command::Login(None),
                [email, name @ ..] if !name.is_empty() => {
                    Command::Login(Some((email.to_string(), name.join(" "))))
                }
                _ => return Err(ShellError::Usage("login [email name...]")),
            },
            "logout" => Command::Logout,
            "profile" | "me" => Command::Profile,
            "rename" if !rest.is_empty() => Command::Rename(rest.join(" ")),
            "rename" => return Err(ShellError::Usage("rename <name...>")),
            "quit" | "exit" => Command::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };

        Ok(command)
    }
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

// =============================================================================
// Session
// =============================================================================

/// One interactive session over the injected stores.
pub struct Session {
    stores: AppStores,
    config: ShellConfig,
    /// Profile order history. Loaded on login, cleared on logout.
    orders: Vec<Order>,
}

impl Session {
    pub fn new(stores: AppStores, config: ShellConfig) -> Self {
        Session {
            stores,
            config,
            orders: Vec::new(),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Parses and runs one input line. Blank lines yield `None`.
    pub fn handle_line(&mut self, line: &str) -> ShellResult<Option<Reply>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let command: Command = line.parse()?;
        self.execute(command).map(Some)
    }

    pub fn execute(&mut self, command: Command) -> ShellResult<Reply> {
        debug!(?command, "execute");

        let text = match command {
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),

            Command::Products => self.render_products(),
            Command::Search(text) => {
                self.stores.products.update(|s| s.set_filter(text));
                self.render_products()
            }
            Command::Show(id) => {
                let product = self.find_product(&id)?;
                let detail = self.render_product_detail(&product);
                self.stores.products.update(|s| s.select_product(Some(product)));
                detail
            }
            Command::Add(id) => {
                let product = self.find_product(&id)?;
                product.ensure_purchasable()?;
                let total_items = self.stores.cart.update(|c| {
                    c.add_item(CartItem::from_product(&product, Quantity::ONE));
                    c.total_items()
                });
                format!("Added {} to cart ({} items)", product.name, total_items)
            }

            Command::Increase(id) => self.edit_line(&id, |cart| cart.increment(&id)),
            Command::Decrease(id) => self.edit_line(&id, |cart| cart.decrement(&id)),
            Command::SetQuantity {
                product_id,
                quantity,
            } => self.edit_line(&product_id, |cart| cart.update_quantity(&product_id, quantity)),
            Command::Remove(id) => self.edit_line(&id, |cart| cart.remove_item(&id)),
            Command::Clear => {
                self.stores.cart.update(|c| c.clear_cart());
                self.render_cart()
            }
            Command::Cart => self.render_cart(),

            Command::Login(credentials) => {
                let user = match credentials {
                    None => fixtures::demo_user(),
                    Some((email, name)) => User {
                        id: email.clone(),
                        email,
                        name,
                        avatar: None,
                    },
                };
                validate_user(&user)?;

                self.orders = fixtures::demo_orders(&user.id);
                self.stores.auth.update(|a| a.login(user));
                self.render_profile()
            }
            Command::Logout => {
                self.stores.auth.update(|a| a.logout());
                self.orders.clear();
                "Signed out.".to_string()
            }
            Command::Profile => self.render_profile(),
            Command::Rename(name) => {
                self.stores.auth.update(|a| {
                    a.update_user(UserPatch {
                        name: Some(name),
                        ..UserPatch::default()
                    })
                });
                self.render_profile()
            }
        };

        Ok(Reply::Text(text))
    }

    fn find_product(&self, id: &str) -> ShellResult<Product> {
        self.stores
            .products
            .read(|s| s.product_by_id(id).cloned())
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()).into())
    }

    /// Applies a cart edit to an existing line, or explains that the line is
    /// not there.
    fn edit_line<F>(&self, product_id: &str, edit: F) -> String
    where
        F: FnOnce(&mut shophub_state::CartStore),
    {
        let in_cart = self.stores.cart.read(|c| c.quantity_of(product_id).is_some());
        if !in_cart {
            return format!("Product {} is not in your cart.", product_id);
        }
        self.stores.cart.update(edit);
        self.render_cart()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn render_products(&self) -> String {
        self.stores.products.read(|store| {
            if store.loading() {
                return "Loading products...".to_string();
            }

            let visible = store.filtered_products();
            let mut lines = Vec::with_capacity(visible.len() + 2);

            if store.filter().is_empty() {
                lines.push(format!("{} products", store.product_count()));
            } else {
                lines.push(format!(
                    "{} products ({} matching \"{}\")",
                    store.product_count(),
                    visible.len(),
                    store.filter()
                ));
            }

            for product in &visible {
                lines.push(format!(
                    "  [{}] {:<24} {:>10}  {}{}",
                    product.id,
                    product.name,
                    self.config.format_price(product.price()),
                    product.category,
                    if product.in_stock { "" } else { "  (Out of Stock)" }
                ));
            }

            if visible.is_empty() {
                lines.push("No products found matching your search.".to_string());
            }

            lines.join("\n")
        })
    }

    fn render_product_detail(&self, product: &Product) -> String {
        format!(
            "{}\n  {}\n  {}  |  {}  |  {}",
            product.name,
            product.description,
            self.config.format_price(product.price()),
            product.category,
            if product.in_stock { "In Stock" } else { "Out of Stock" }
        )
    }

    fn render_cart(&self) -> String {
        self.stores.cart.read(|cart| {
            if cart.is_empty() {
                return "Your cart is empty.".to_string();
            }

            let mut lines: Vec<String> = cart
                .items()
                .iter()
                .map(|item| {
                    format!(
                        "  [{}] {:<24} x{:<3} {:>10} each  {:>10}",
                        item.product_id,
                        item.product_name,
                        item.quantity,
                        self.config.format_price(item.unit_price()),
                        self.config.format_price(item.line_total())
                    )
                })
                .collect();

            lines.push(format!(
                "Items ({})  Total: {}",
                cart.total_items(),
                self.config.format_price(cart.total_price())
            ));
            lines.join("\n")
        })
    }

    fn render_profile(&self) -> String {
        let header = self.stores.auth.read(|auth| {
            if auth.is_authenticated() {
                Some(format!(
                    "[{}] {} <{}>",
                    auth.user_initial(),
                    auth.user_name(),
                    auth.user_email()
                ))
            } else {
                None
            }
        });

        let Some(header) = header else {
            return "Not signed in. Type `login` to sign in as the demo user.".to_string();
        };

        let mut lines = vec![header];
        if self.orders.is_empty() {
            lines.push("No orders yet.".to_string());
        } else {
            lines.push("Orders:".to_string());
            for order in &self.orders {
                lines.push(format!(
                    "  {}  {}  {:<10}  {} items  {}",
                    order.id,
                    order.created_at.format("%b %-d, %Y"),
                    order.status.as_str(),
                    order.item_count(),
                    self.config.format_price(order.total())
                ));
            }
        }
        lines.join("\n")
    }
}
