mod onboarding;
mod reader;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use onboarding::OnboardingView;
pub use reader::ReaderView;
