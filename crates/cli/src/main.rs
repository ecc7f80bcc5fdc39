use clap::{Parser, Subcommand, ValueEnum};
use intercom::contact::Contact;
use intercom::conversation::{ConversationListState, ReplyType};
use intercom::{Admin, Intercom, PageParams, User};

#[derive(Parser)]
#[command(name = "intercom")]
#[command(about = "Intercom CLI", long_about = None)]
struct Cli {
    /// Config file path (default: INTERCOM_CONFIG_PATH or ~/.intercom/config.json)
    #[arg(long, short, value_name = "PATH", global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version
    Version,

    /// Find, list, scroll, and delete contacts.
    Contacts {
        #[command(subcommand)]
        command: ContactsCommand,
    },

    /// Find, list, reply to, assign, open, and close conversations.
    Conversations {
        #[command(subcommand)]
        command: ConversationsCommand,
    },

    /// List and find segments.
    Segments {
        #[command(subcommand)]
        command: SegmentsCommand,
    },
}

#[derive(clap::Args)]
struct PageArgs {
    /// Page number (1-based)
    #[arg(long)]
    page: Option<u32>,

    /// Results per page
    #[arg(long)]
    per_page: Option<u32>,
}

impl PageArgs {
    fn params(&self) -> PageParams {
        PageParams {
            page: self.page,
            per_page: self.per_page,
            total_pages: None,
        }
    }
}

#[derive(Subcommand)]
enum ContactsCommand {
    /// Find a contact by Intercom id (or by user_id with --user-id).
    Find {
        id: String,
        /// Treat the argument as the contact's user_id.
        #[arg(long)]
        user_id: bool,
    },
    /// List contacts, optionally filtered by segment, tag, or email.
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long, value_name = "ID", conflicts_with_all = ["tag", "email"])]
        segment: Option<String>,
        #[arg(long, value_name = "ID", conflicts_with = "email")]
        tag: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Fetch the next batch from the scroll API. Omit --cursor to start.
    Scroll {
        #[arg(long)]
        cursor: Option<String>,
    },
    /// Delete a contact by id.
    Delete { id: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum State {
    All,
    Open,
    Closed,
    Unread,
}

impl From<State> for ConversationListState {
    fn from(s: State) -> Self {
        match s {
            State::All => ConversationListState::All,
            State::Open => ConversationListState::Open,
            State::Closed => ConversationListState::Closed,
            State::Unread => ConversationListState::Unread,
        }
    }
}

#[derive(Subcommand)]
enum ConversationsCommand {
    /// Find a conversation by id.
    Find { id: String },
    /// List conversations: all, or scoped to an admin or a user.
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Conversations assigned to this admin id.
        #[arg(long, value_name = "ID", conflicts_with = "user")]
        admin: Option<String>,
        /// Conversations of this user (Intercom id).
        #[arg(long, value_name = "ID")]
        user: Option<String>,
        /// open/closed apply to admin scope, unread to user scope.
        #[arg(long, value_enum, default_value = "all")]
        state: State,
    },
    /// Reply as an admin or a user.
    Reply {
        id: String,
        #[arg(long, value_name = "ID", conflicts_with = "user", required_unless_present = "user")]
        admin: Option<String>,
        #[arg(long, value_name = "ID")]
        user: Option<String>,
        #[arg(long)]
        body: String,
        /// Post as an internal note (admins only).
        #[arg(long, requires = "admin")]
        note: bool,
        /// Attachment URL; repeat for several.
        #[arg(long = "attachment", value_name = "URL")]
        attachments: Vec<String>,
    },
    /// Assign a conversation to another admin.
    Assign {
        id: String,
        #[arg(long, value_name = "ID")]
        admin: String,
        #[arg(long, value_name = "ID")]
        assignee: String,
    },
    /// Open a conversation.
    Open {
        id: String,
        #[arg(long, value_name = "ID")]
        admin: String,
    },
    /// Close a conversation.
    Close {
        id: String,
        #[arg(long, value_name = "ID")]
        admin: String,
    },
    /// Mark a conversation as read.
    MarkRead { id: String },
}

#[derive(Subcommand)]
enum SegmentsCommand {
    /// List all segments.
    List,
    /// Find a segment by id.
    Find { id: String },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("intercom {}", env!("CARGO_PKG_VERSION"));
        }
        Some(command) => {
            if let Err(e) = run(cli.config, command).await {
                log::error!("{:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("Run with --help for usage");
        }
    }
}

async fn run(config_path: Option<std::path::PathBuf>, command: Commands) -> anyhow::Result<()> {
    let (config, path) = intercom::config::load_config(config_path)?;
    log::debug!("using config {}", path.display());
    let ic = Intercom::from_config(&config)?;
    match command {
        Commands::Version => Ok(()),
        Commands::Contacts { command } => run_contacts(&ic, command).await,
        Commands::Conversations { command } => run_conversations(&ic, command).await,
        Commands::Segments { command } => run_segments(&ic, command).await,
    }
}

async fn run_contacts(ic: &Intercom, command: ContactsCommand) -> anyhow::Result<()> {
    match command {
        ContactsCommand::Find { id, user_id } => {
            let contact = if user_id {
                ic.contacts.find_by_user_id(&id).await?
            } else {
                ic.contacts.find_by_id(&id).await?
            };
            print_json(&contact)
        }
        ContactsCommand::List {
            page,
            segment,
            tag,
            email,
        } => {
            let pages = page.params();
            let list = match (segment, tag, email) {
                (Some(s), _, _) => ic.contacts.list_by_segment(&s, &pages).await?,
                (_, Some(t), _) => ic.contacts.list_by_tag(&t, &pages).await?,
                (_, _, Some(e)) => ic.contacts.list_by_email(&e, &pages).await?,
                _ => ic.contacts.list(&pages).await?,
            };
            print_json(&list)
        }
        ContactsCommand::Scroll { cursor } => {
            print_json(&ic.contacts.scroll(cursor.as_deref()).await?)
        }
        ContactsCommand::Delete { id } => {
            let contact = Contact {
                id,
                ..Contact::default()
            };
            print_json(&ic.contacts.delete(&contact).await?)
        }
    }
}

async fn run_conversations(ic: &Intercom, command: ConversationsCommand) -> anyhow::Result<()> {
    let conversations = &ic.conversations;
    match command {
        ConversationsCommand::Find { id } => print_json(&conversations.find(&id).await?),
        ConversationsCommand::List {
            page,
            admin,
            user,
            state,
        } => {
            let pages = page.params();
            let list = match (admin, user) {
                (Some(a), _) => {
                    conversations
                        .list_by_admin(&Admin::new(a), state.into(), &pages)
                        .await?
                }
                (_, Some(u)) => {
                    conversations
                        .list_by_user(&User::new(u), state.into(), &pages)
                        .await?
                }
                _ => conversations.list_all(&pages).await?,
            };
            print_json(&list)
        }
        ConversationsCommand::Reply {
            id,
            admin,
            user,
            body,
            note,
            attachments,
        } => {
            let reply_type = if note {
                ReplyType::Note
            } else {
                ReplyType::Comment
            };
            let conv = match (admin, user) {
                (Some(a), _) => {
                    conversations
                        .reply_with_attachment_urls(&id, &Admin::new(a), reply_type, &body, attachments)
                        .await?
                }
                (_, Some(u)) => {
                    conversations
                        .reply_with_attachment_urls(&id, &User::new(u), reply_type, &body, attachments)
                        .await?
                }
                (None, None) => anyhow::bail!("reply needs --admin or --user"),
            };
            print_json(&conv)
        }
        ConversationsCommand::Assign {
            id,
            admin,
            assignee,
        } => print_json(
            &conversations
                .assign(&id, &Admin::new(admin), &Admin::new(assignee))
                .await?,
        ),
        ConversationsCommand::Open { id, admin } => {
            print_json(&conversations.open(&id, &Admin::new(admin)).await?)
        }
        ConversationsCommand::Close { id, admin } => {
            print_json(&conversations.close(&id, &Admin::new(admin)).await?)
        }
        ConversationsCommand::MarkRead { id } => print_json(&conversations.mark_read(&id).await?),
    }
}

async fn run_segments(ic: &Intercom, command: SegmentsCommand) -> anyhow::Result<()> {
    match command {
        SegmentsCommand::List => print_json(&ic.segments.list().await?),
        SegmentsCommand::Find { id } => print_json(&ic.segments.find(&id).await?),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
