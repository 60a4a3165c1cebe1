//! Transient fault classification.
//!
//! Only two narrow categories are ever retried: HTTP request failures and
//! connection-level network failures. Everything else propagates on first
//! occurrence.

use std::io;

/// An error that can tell whether it is a transient fault worth retrying.
pub trait TransientFault {
    fn is_transient(&self) -> bool;
}

impl TransientFault for reqwest::Error {
    /// Connect, timeout, request, body and status failures are transient.
    /// Builder, redirect and decode failures are not: repeating the same
    /// request cannot fix them.
    fn is_transient(&self) -> bool {
        if self.is_builder() || self.is_redirect() || self.is_decode() {
            return false;
        }
        self.is_connect() || self.is_timeout() || self.is_request() || self.is_body() || self.is_status()
    }
}

impl TransientFault for io::Error {
    fn is_transient(&self) -> bool {
        is_transient_io_kind(self.kind())
    }
}

/// Connection-level I/O error kinds.
pub fn is_transient_io_kind(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::TimedOut
            | io::ErrorKind::UnexpectedEof
            | io::ErrorKind::AddrNotAvailable
    )
}

impl<T: TransientFault + ?Sized> TransientFault for Box<T> {
    fn is_transient(&self) -> bool {
        (**self).is_transient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_kinds_are_transient() {
        for kind in [
            io::ErrorKind::ConnectionRefused,
            io::ErrorKind::ConnectionReset,
            io::ErrorKind::BrokenPipe,
            io::ErrorKind::TimedOut,
        ] {
            assert!(io::Error::from(kind).is_transient(), "{:?}", kind);
        }
    }

    #[test]
    fn test_other_io_kinds_are_not_transient() {
        for kind in [
            io::ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied,
            io::ErrorKind::InvalidData,
            io::ErrorKind::Other,
        ] {
            assert!(!io::Error::from(kind).is_transient(), "{:?}", kind);
        }
    }

    #[test]
    fn test_boxed_delegates() {
        let err: Box<io::Error> = Box::new(io::Error::from(io::ErrorKind::ConnectionReset));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_reqwest_connect_error_is_transient() {
        // Nothing listens on this port once the listener is dropped.
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let err = reqwest::Client::new()
            .get(format!("http://{}", addr))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_reqwest_builder_error_is_not_transient() {
        let err = reqwest::Client::new()
            .get("not a url")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_builder());
        assert!(!err.is_transient());
    }
}
