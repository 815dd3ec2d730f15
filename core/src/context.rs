//! Request-scoped context carried across the service boundary.
//!
//! Every inbound operation runs against a [`RequestContext`] holding the two
//! pieces of request-scoped state the core needs: the transactional handle
//! opened by the boundary layer and the authenticated identity established by
//! the authentication step. The accessors fail with
//! [`DomainError::MissingContext`] instead of returning a default, so a route
//! that forgot to apply one of the two steps surfaces as an error rather than
//! silently operating on nothing.
//!
//! The transaction handle type is opaque to the core: the boundary layer
//! chooses it (a database transaction in production, `()` in tests), owns its
//! lifecycle, and takes it back for commit or rollback.

use crate::errors::{DomainError, DomainResult};

/// Request-scoped state threaded through the services
#[derive(Debug, Default)]
pub struct RequestContext<Tx> {
    transaction: Option<Tx>,
    identity: Option<String>,
}

impl<Tx> RequestContext<Tx> {
    /// Create an empty context
    pub fn new() -> Self {
        Self {
            transaction: None,
            identity: None,
        }
    }

    /// Attach the transactional handle for this request
    pub fn with_transaction(mut self, transaction: Tx) -> Self {
        self.transaction = Some(transaction);
        self
    }

    /// Attach the authenticated identity for this request
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Borrow the transactional handle
    ///
    /// Fails with `MissingContext` if no transaction was attached.
    pub fn transaction(&mut self) -> DomainResult<&mut Tx> {
        self.transaction
            .as_mut()
            .ok_or(DomainError::MissingContext { key: "transaction" })
    }

    /// The authenticated identity for this request
    ///
    /// Fails with `MissingContext` if no identity was attached.
    pub fn identity(&self) -> DomainResult<&str> {
        self.identity
            .as_deref()
            .ok_or(DomainError::MissingContext { key: "identity" })
    }

    /// Hand the transactional handle back to the boundary layer
    ///
    /// The boundary commits or rolls back; the core never does either.
    pub fn take_transaction(&mut self) -> Option<Tx> {
        self.transaction.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_accessor_fails_when_unset() {
        let mut ctx: RequestContext<()> = RequestContext::new();
        match ctx.transaction() {
            Err(DomainError::MissingContext { key }) => assert_eq!(key, "transaction"),
            other => panic!("expected MissingContext, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_identity_accessor_fails_when_unset() {
        let ctx: RequestContext<()> = RequestContext::new();
        match ctx.identity() {
            Err(DomainError::MissingContext { key }) => assert_eq!(key, "identity"),
            other => panic!("expected MissingContext, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_accessors_return_attached_values() {
        let mut ctx = RequestContext::new()
            .with_transaction(())
            .with_identity("user-1");
        assert!(ctx.transaction().is_ok());
        assert_eq!(ctx.identity().unwrap(), "user-1");
    }

    #[test]
    fn test_take_transaction_empties_the_context() {
        let mut ctx = RequestContext::new().with_transaction(42u32);
        assert_eq!(ctx.take_transaction(), Some(42));
        assert!(ctx.transaction().is_err());
    }
}
