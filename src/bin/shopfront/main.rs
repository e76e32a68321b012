extern crate async_std;
extern crate dotenv;
extern crate gumdrop;

use async_std::sync::Arc;
use async_std::task;
use gumdrop::{parse_args_default_or_exit, Options as Gumdrop};
use log::{debug, info};
use std::env::args;
use std::process::exit;

use shopfront::{
  version, Command, Configuration, Context, FileStorage, IsahcTransport, Page, ProductForm,
};

mod terminal;

use terminal::TerminalView;

#[derive(Debug, Gumdrop)]
struct Options {
  #[options(help = "configuration json file")]
  config: Configuration,

  #[options(help = "display the help text")]
  help: bool,

  #[options(help = "print the version and exit")]
  version: bool,

  #[options(command)]
  command: Option<Action>,
}

#[derive(Debug, Gumdrop)]
enum Action {
  #[options(help = "create a new account")]
  Register(RegisterOptions),

  #[options(help = "sign in and remember the session")]
  Login(LoginOptions),

  #[options(help = "forget the current session")]
  Logout(EmptyOptions),

  #[options(help = "list the catalog")]
  Products(EmptyOptions),

  #[options(help = "show who is signed in")]
  Status(EmptyOptions),

  #[options(help = "create a product, or update one when an id is given")]
  Save(SaveOptions),

  #[options(help = "show the edit form for a product")]
  Edit(ProductOptions),

  #[options(help = "delete a product")]
  Delete(DeleteOptions),
}

#[derive(Debug, Default, Gumdrop)]
struct EmptyOptions {
  #[options(help = "display the help text")]
  help: bool,
}

#[derive(Debug, Default, Gumdrop)]
struct RegisterOptions {
  #[options(help = "display the help text")]
  help: bool,

  #[options(help = "account email")]
  email: String,

  #[options(help = "account password")]
  password: String,

  #[options(help = "the password again")]
  confirm: String,
}

#[derive(Debug, Default, Gumdrop)]
struct LoginOptions {
  #[options(help = "display the help text")]
  help: bool,

  #[options(help = "account email")]
  email: String,

  #[options(help = "account password")]
  password: String,
}

#[derive(Debug, Default, Gumdrop)]
struct SaveOptions {
  #[options(help = "display the help text")]
  help: bool,

  #[options(help = "id of the product to update")]
  id: Option<i64>,

  #[options(help = "product name")]
  name: String,

  #[options(help = "product description")]
  description: String,

  #[options(help = "product price")]
  price: String,

  #[options(help = "units in stock")]
  stock: String,
}

#[derive(Debug, Default, Gumdrop)]
struct ProductOptions {
  #[options(help = "display the help text")]
  help: bool,

  #[options(required, help = "product id")]
  id: i64,
}

#[derive(Debug, Default, Gumdrop)]
struct DeleteOptions {
  #[options(help = "display the help text")]
  help: bool,

  #[options(required, help = "product id")]
  id: i64,

  #[options(help = "skip the confirmation prompt")]
  yes: bool,
}

fn main() {
  env_logger::builder().format_timestamp_millis().init();

  if let Err(e) = dotenv::dotenv() {
    debug!("unable to load .env - {}", e);
  }

  let opts = parse_args_default_or_exit::<Options>();

  if opts.version {
    let args = args().collect::<Vec<_>>();
    println!("{} version - {}", args[0], version::version());
    exit(0);
  }

  let action = match opts.command {
    Some(action) => action,
    None => {
      println!("{}", Options::usage());
      exit(0);
    }
  };

  let assume_yes = matches!(&action, Action::Delete(DeleteOptions { yes: true, .. }));

  info!(
    "storefront client (version {}) against '{}'",
    version::version(),
    opts.config.api_base
  );

  let transport = match IsahcTransport::open() {
    Ok(transport) => transport,
    Err(e) => {
      eprintln!("unable to create http client - {}", e);
      exit(1);
    }
  };

  let context = Context::builder()
    .configuration(&opts.config)
    .transport(transport)
    .storage(FileStorage::open(&opts.config.storage.path))
    .view(Arc::new(TerminalView { assume_yes }));

  let context = match context.build() {
    Ok(context) => context,
    Err(e) => {
      eprintln!("unable to start - {}", e);
      exit(1);
    }
  };

  task::block_on(async {
    match action {
      Action::Register(o) => {
        let command = Command::Register {
          email: o.email,
          password: o.password,
          confirm_password: o.confirm,
        };
        context.dispatch(command).await
      }
      Action::Login(o) => {
        let command = Command::Login {
          email: o.email,
          password: o.password,
        };
        context.dispatch(command).await
      }
      Action::Logout(_) => context.dispatch(Command::Logout).await,
      Action::Products(_) => context.boot(Page::Products).await,
      Action::Status(_) => context.boot(Page::Landing).await,
      Action::Save(o) => {
        let form = ProductForm {
          id: o.id,
          name: o.name,
          description: o.description,
          price: o.price,
          stock: o.stock,
        };
        context.dispatch(Command::SaveProduct(form)).await
      }
      Action::Edit(o) => context.dispatch(Command::EditProduct { id: o.id }).await,
      Action::Delete(o) => context.dispatch(Command::DeleteProduct { id: o.id }).await,
    }
  });
}
