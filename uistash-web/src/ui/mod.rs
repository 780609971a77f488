mod app;
pub use app::{App, AppMsg, Page};

mod comment_thread;
pub use comment_thread::CommentThread;

mod detail;
pub use detail::Detail;

mod editor;
pub use editor::{Editor, SourceTab};

mod export_popup;
pub use export_popup::ExportPopup;

mod favourites;
pub use favourites::Favourites;

mod gallery;
pub use gallery::Gallery;

mod home;
pub use home::Home;

mod login_modal;
pub use login_modal::LoginModal;

mod navbar;
pub use navbar::Navbar;

mod profile;
pub use profile::Profile;

mod review;
pub use review::Review;

mod snippet_card;
pub use snippet_card::SnippetCard;

mod snippet_preview;
pub use snippet_preview::SnippetPreview;

mod spotlight;
pub use spotlight::Spotlight;
