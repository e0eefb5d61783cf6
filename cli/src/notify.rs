//! Terminal notifier: the toast layer of the original app, on stdout.

use gatehouse_core::{NoticeKind, Notifier};

#[derive(Debug, Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, body: &str) {
        match kind {
            NoticeKind::Error => eprintln!("✗ {title}: {body}"),
            NoticeKind::Info => println!("ℹ {title}: {body}"),
            NoticeKind::Success => println!("✓ {title}: {body}"),
        }
    }
}
