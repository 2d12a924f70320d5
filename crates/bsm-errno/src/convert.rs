//! Conversion between the BSM and local error-number spaces.
//!
//! The two directions fail differently on purpose. BSM→local can miss:
//! the record may have been written on a platform whose errno space we
//! cannot express, or the octet may simply be garbage from an untrusted
//! trail, and the caller gets an ordinary [`ForeignErrno`] to handle.
//! local→BSM never misses: the writing side must always be able to emit
//! a valid octet, so anything unmapped collapses to
//! [`BSM_UNKNOWNERR`](crate::codes::BSM_UNKNOWNERR) and the loss of
//! detail is accepted.

use core::fmt;

use libc::c_int;

use crate::code::BsmErrno;
use crate::codes::BSM_UNKNOWNERR;
use crate::table;

/// A BSM error number with no native counterpart on this platform.
///
/// An expected outcome when reading trails produced elsewhere, not a
/// fault: treat the code as opaque, or display it via [`strerror`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignErrno(BsmErrno);

impl ForeignErrno {
    /// The offending BSM error number.
    #[inline]
    pub const fn code(self) -> BsmErrno {
        self.0
    }
}

impl fmt::Display for ForeignErrno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BSM error {} has no local equivalent", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ForeignErrno {}

/// Resolve a BSM error number to this platform's errno value.
///
/// Scans the mapping table in order and returns the first match.
#[inline]
pub fn bsm_to_errno(code: BsmErrno) -> Result<c_int, ForeignErrno> {
    table::entries()
        .find(|m| m.bsm == code)
        .map(|m| m.errno)
        .ok_or(ForeignErrno(code))
}

/// Resolve a local errno value to its BSM error number.
///
/// Total: a local error the table does not know collapses to
/// `BSM_UNKNOWNERR` rather than failing, so record generation can
/// always serialize something.
#[inline]
pub fn errno_to_bsm(errno: c_int) -> BsmErrno {
    table::entries()
        .find(|m| m.errno == errno)
        .map(|m| m.bsm)
        .unwrap_or(BSM_UNKNOWNERR)
}

/// Placeholder description for BSM error numbers foreign to this
/// platform.
#[cfg(feature = "std")]
pub const FOREIGN_STRERROR: &str = "Foreign BSM error";

/// Human-readable description of a BSM error number.
///
/// The platform's own errno description when the code maps, the fixed
/// [`FOREIGN_STRERROR`] placeholder when it does not. Never fails.
#[cfg(feature = "std")]
pub fn strerror(code: BsmErrno) -> &'static str {
    match bsm_to_errno(code) {
        Ok(errno) => nix::errno::Errno::from_raw(errno).desc(),
        Err(_) => FOREIGN_STRERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::*;

    #[test]
    fn every_row_resolves_to_its_errno() {
        for m in table::entries() {
            assert_eq!(bsm_to_errno(m.bsm), Ok(m.errno), "row {}", m.bsm);
        }
    }

    #[test]
    fn success_maps_both_ways() {
        assert_eq!(bsm_to_errno(BSM_ESUCCESS), Ok(0));
        assert_eq!(errno_to_bsm(0), BSM_ESUCCESS);
    }

    #[test]
    fn enoent_maps_both_ways() {
        assert_eq!(bsm_to_errno(BSM_ENOENT), Ok(libc::ENOENT));
        assert_eq!(errno_to_bsm(libc::ENOENT), BSM_ENOENT);
    }

    #[test]
    fn unassigned_octet_is_foreign() {
        let miss = bsm_to_errno(BsmErrno::new(255));
        assert_eq!(miss, Err(ForeignErrno(BsmErrno::new(255))));
        assert_eq!(miss.unwrap_err().code(), BsmErrno::new(255));
    }

    #[test]
    fn unknown_sentinel_itself_is_foreign() {
        assert!(bsm_to_errno(BSM_UNKNOWNERR).is_err());
    }

    #[test]
    fn unmapped_local_collapses_to_unknown() {
        assert_eq!(errno_to_bsm(-999_999), BSM_UNKNOWNERR);
        assert_eq!(errno_to_bsm(c_int::MAX), BSM_UNKNOWNERR);
    }

    #[test]
    fn round_trip_where_local_is_unambiguous() {
        let rows: Vec<_> = table::entries().collect();
        for (i, m) in rows.iter().enumerate() {
            let first_with_errno = rows.iter().take(i).all(|p| p.errno != m.errno);
            if first_with_errno {
                assert_eq!(errno_to_bsm(m.errno), m.bsm, "row {}", m.bsm);
            }
        }
    }

    #[test]
    fn lookups_are_idempotent() {
        assert_eq!(bsm_to_errno(BSM_EPIPE), bsm_to_errno(BSM_EPIPE));
        assert_eq!(errno_to_bsm(libc::EPIPE), errno_to_bsm(libc::EPIPE));
    }

    // Linux folds ENOTSUP/EOPNOTSUPP and EDEADLK/EDEADLOCK into single
    // values; the earlier table row wins the local→BSM direction.
    #[cfg(target_os = "linux")]
    #[test]
    fn aliased_locals_resolve_to_first_row() {
        assert_eq!(errno_to_bsm(libc::EOPNOTSUPP), BSM_ENOTSUP);
        assert_eq!(errno_to_bsm(libc::EDEADLOCK), BSM_EDEADLK);
        // Both BSM spellings still resolve forward.
        assert_eq!(bsm_to_errno(BSM_EOPNOTSUPP), Ok(libc::EOPNOTSUPP));
        assert_eq!(bsm_to_errno(BSM_EDEADLOCK), Ok(libc::EDEADLOCK));
    }

    #[test]
    fn foreign_errno_display() {
        let err = bsm_to_errno(BsmErrno::new(255)).unwrap_err();
        assert_eq!(err.to_string(), "BSM error 255 has no local equivalent");
    }

    #[cfg(feature = "std")]
    mod strerror_tests {
        use super::*;

        #[test]
        fn mapped_code_gets_platform_description() {
            let desc = strerror(BSM_ENOENT);
            assert_eq!(desc, nix::errno::Errno::from_raw(libc::ENOENT).desc());
            assert_ne!(desc, FOREIGN_STRERROR);
        }

        #[test]
        fn foreign_code_gets_placeholder() {
            assert_eq!(strerror(BsmErrno::new(255)), FOREIGN_STRERROR);
            assert_eq!(strerror(BSM_UNKNOWNERR), FOREIGN_STRERROR);
        }

        #[test]
        fn success_code_describes_local_zero() {
            // Errno 0 is "no error"; whatever the platform calls it,
            // the lookup itself must not fall back to the placeholder.
            assert_ne!(strerror(BSM_ESUCCESS), FOREIGN_STRERROR);
        }
    }
}
