//! Inbound enquiry pipeline: classify the submitted payload, render the two
//! emails, dispatch them through the email transport.

pub mod classify;
pub mod dispatch;
pub mod render;

pub use classify::{classify, ChildEntry, ClassifyError, Contact, EnquiryForm, Variant};
pub use dispatch::{DispatchError, DispatchReceipt, Dispatcher, EnquiryRouting, Route};
