//! Pages
//!
//! One component per route.

mod home;
mod spot_list;
mod spot_detail;
mod not_found;

pub use home::HomePage;
pub use spot_list::SpotListPage;
pub use spot_detail::SpotDetailPage;
pub use not_found::NotFoundPage;
