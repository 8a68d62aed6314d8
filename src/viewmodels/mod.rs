pub mod demographics_viewmodel;
pub mod session_viewmodel;

pub use demographics_viewmodel::DemographicsViewModel;
pub use session_viewmodel::SessionViewModel;
