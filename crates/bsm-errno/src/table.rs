//! The BSM ⇄ errno mapping table.
//!
//! One row per BSM error number that has a native counterpart on this
//! build's platform. The table is split into a portable base and a
//! platform extension selected at compile time; a target whose errno
//! space lacks a concept simply has no row for it, so membership is
//! settled by the build, never by a runtime branch.
//!
//! Invariants, maintained by hand and asserted by the tests below:
//!
//! - each slice is sorted ascending by BSM code;
//! - BSM codes are unique across the composed table;
//! - [`crate::codes::BSM_UNKNOWNERR`] is never a member;
//! - local values may repeat where a platform aliases two errno names
//!   (Linux spells `ENOTSUP` and `EOPNOTSUPP` with one value, likewise
//!   `EDEADLK` and `EDEADLOCK`). Lookups stop at the first match, so
//!   the earlier row wins for the local→BSM direction.

use libc::c_int;

use crate::code::BsmErrno;
use crate::codes::*;

/// One immutable (BSM, local) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    /// The wire-side BSM error number.
    pub bsm: BsmErrno,
    /// This platform's native errno value.
    pub errno: c_int,
}

const fn row(bsm: BsmErrno, errno: c_int) -> Mapping {
    Mapping { bsm, errno }
}

/// Rows whose errno exists on every platform this crate supports.
static BASE: &[Mapping] = &[
    row(BSM_ESUCCESS, 0),
    row(BSM_EPERM, libc::EPERM),
    row(BSM_ENOENT, libc::ENOENT),
    row(BSM_ESRCH, libc::ESRCH),
    row(BSM_EINTR, libc::EINTR),
    row(BSM_EIO, libc::EIO),
    row(BSM_ENXIO, libc::ENXIO),
    row(BSM_E2BIG, libc::E2BIG),
    row(BSM_ENOEXEC, libc::ENOEXEC),
    row(BSM_EBADF, libc::EBADF),
    row(BSM_ECHILD, libc::ECHILD),
    row(BSM_EAGAIN, libc::EAGAIN),
    row(BSM_ENOMEM, libc::ENOMEM),
    row(BSM_EACCES, libc::EACCES),
    row(BSM_EFAULT, libc::EFAULT),
    row(BSM_ENOTBLK, libc::ENOTBLK),
    row(BSM_EBUSY, libc::EBUSY),
    row(BSM_EEXIST, libc::EEXIST),
    row(BSM_EXDEV, libc::EXDEV),
    row(BSM_ENODEV, libc::ENODEV),
    row(BSM_ENOTDIR, libc::ENOTDIR),
    row(BSM_EISDIR, libc::EISDIR),
    row(BSM_EINVAL, libc::EINVAL),
    row(BSM_ENFILE, libc::ENFILE),
    row(BSM_EMFILE, libc::EMFILE),
    row(BSM_ENOTTY, libc::ENOTTY),
    row(BSM_ETXTBSY, libc::ETXTBSY),
    row(BSM_EFBIG, libc::EFBIG),
    row(BSM_ENOSPC, libc::ENOSPC),
    row(BSM_ESPIPE, libc::ESPIPE),
    row(BSM_EROFS, libc::EROFS),
    row(BSM_EMLINK, libc::EMLINK),
    row(BSM_EPIPE, libc::EPIPE),
    row(BSM_EDOM, libc::EDOM),
    row(BSM_ERANGE, libc::ERANGE),
    row(BSM_ENOMSG, libc::ENOMSG),
    row(BSM_EIDRM, libc::EIDRM),
    row(BSM_EDEADLK, libc::EDEADLK),
    row(BSM_ENOLCK, libc::ENOLCK),
    row(BSM_ECANCELED, libc::ECANCELED),
    row(BSM_ENOTSUP, libc::ENOTSUP),
    row(BSM_EDQUOT, libc::EDQUOT),
    row(BSM_EOWNERDEAD, libc::EOWNERDEAD),
    row(BSM_ENOTRECOVERABLE, libc::ENOTRECOVERABLE),
    row(BSM_EREMOTE, libc::EREMOTE),
    row(BSM_ENOLINK, libc::ENOLINK),
    row(BSM_EPROTO, libc::EPROTO),
    row(BSM_EMULTIHOP, libc::EMULTIHOP),
    row(BSM_EBADMSG, libc::EBADMSG),
    row(BSM_ENAMETOOLONG, libc::ENAMETOOLONG),
    row(BSM_EOVERFLOW, libc::EOVERFLOW),
    row(BSM_EILSEQ, libc::EILSEQ),
    row(BSM_ENOSYS, libc::ENOSYS),
    row(BSM_ELOOP, libc::ELOOP),
    row(BSM_ENOTEMPTY, libc::ENOTEMPTY),
    row(BSM_EUSERS, libc::EUSERS),
    row(BSM_ENOTSOCK, libc::ENOTSOCK),
    row(BSM_EDESTADDRREQ, libc::EDESTADDRREQ),
    row(BSM_EMSGSIZE, libc::EMSGSIZE),
    row(BSM_EPROTOTYPE, libc::EPROTOTYPE),
    row(BSM_ENOPROTOOPT, libc::ENOPROTOOPT),
    row(BSM_EPROTONOSUPPORT, libc::EPROTONOSUPPORT),
    row(BSM_ESOCKTNOSUPPORT, libc::ESOCKTNOSUPPORT),
    row(BSM_EOPNOTSUPP, libc::EOPNOTSUPP),
    row(BSM_EPFNOSUPPORT, libc::EPFNOSUPPORT),
    row(BSM_EAFNOSUPPORT, libc::EAFNOSUPPORT),
    row(BSM_EADDRINUSE, libc::EADDRINUSE),
    row(BSM_EADDRNOTAVAIL, libc::EADDRNOTAVAIL),
    row(BSM_ENETDOWN, libc::ENETDOWN),
    row(BSM_ENETRESET, libc::ENETRESET),
    row(BSM_ECONNABORTED, libc::ECONNABORTED),
    row(BSM_ECONNRESET, libc::ECONNRESET),
    row(BSM_ENOBUFS, libc::ENOBUFS),
    row(BSM_EISCONN, libc::EISCONN),
    row(BSM_ENOTCONN, libc::ENOTCONN),
    row(BSM_ESHUTDOWN, libc::ESHUTDOWN),
    row(BSM_ETOOMANYREFS, libc::ETOOMANYREFS),
    row(BSM_ETIMEDOUT, libc::ETIMEDOUT),
    row(BSM_ECONNREFUSED, libc::ECONNREFUSED),
    row(BSM_EHOSTDOWN, libc::EHOSTDOWN),
    row(BSM_EHOSTUNREACH, libc::EHOSTUNREACH),
    row(BSM_EALREADY, libc::EALREADY),
    row(BSM_EINPROGRESS, libc::EINPROGRESS),
    row(BSM_ESTALE, libc::ESTALE),
];

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        /// Errno concepts only the Linux tree spells.
        static OS_EXT: &[Mapping] = &[
            row(BSM_ECHRNG, libc::ECHRNG),
            row(BSM_EL2NSYNC, libc::EL2NSYNC),
            row(BSM_EL3HLT, libc::EL3HLT),
            row(BSM_EL3RST, libc::EL3RST),
            row(BSM_ELNRNG, libc::ELNRNG),
            row(BSM_EUNATCH, libc::EUNATCH),
            row(BSM_ENOCSI, libc::ENOCSI),
            row(BSM_EL2HLT, libc::EL2HLT),
            row(BSM_EBADE, libc::EBADE),
            row(BSM_EBADR, libc::EBADR),
            row(BSM_EXFULL, libc::EXFULL),
            row(BSM_ENOANO, libc::ENOANO),
            row(BSM_EBADRQC, libc::EBADRQC),
            row(BSM_EBADSLT, libc::EBADSLT),
            row(BSM_EDEADLOCK, libc::EDEADLOCK),
            row(BSM_EBFONT, libc::EBFONT),
            row(BSM_ENOSTR, libc::ENOSTR),
            row(BSM_ENONET, libc::ENONET),
            row(BSM_ENOPKG, libc::ENOPKG),
            row(BSM_EADV, libc::EADV),
            row(BSM_ESRMNT, libc::ESRMNT),
            row(BSM_ECOMM, libc::ECOMM),
            row(BSM_ENOTUNIQ, libc::ENOTUNIQ),
            row(BSM_EBADFD, libc::EBADFD),
            row(BSM_EREMCHG, libc::EREMCHG),
            row(BSM_ELIBACC, libc::ELIBACC),
            row(BSM_ELIBBAD, libc::ELIBBAD),
            row(BSM_ELIBSCN, libc::ELIBSCN),
            row(BSM_ELIBMAX, libc::ELIBMAX),
            row(BSM_ELIBEXEC, libc::ELIBEXEC),
            row(BSM_ERESTART, libc::ERESTART),
            row(BSM_ESTRPIPE, libc::ESTRPIPE),
            row(BSM_EDOTDOT, libc::EDOTDOT),
            row(BSM_EUCLEAN, libc::EUCLEAN),
            row(BSM_ENOTNAM, libc::ENOTNAM),
            row(BSM_ENAVAIL, libc::ENAVAIL),
            row(BSM_EISNAM, libc::EISNAM),
            row(BSM_EREMOTEIO, libc::EREMOTEIO),
            row(BSM_ENOMEDIUM, libc::ENOMEDIUM),
            row(BSM_EMEDIUMTYPE, libc::EMEDIUMTYPE),
            row(BSM_ENOKEY, libc::ENOKEY),
            row(BSM_EKEYEXPIRED, libc::EKEYEXPIRED),
            row(BSM_EKEYREVOKED, libc::EKEYREVOKED),
            row(BSM_EKEYREJECTED, libc::EKEYREJECTED),
        ];
    } else if #[cfg(target_os = "macos")] {
        /// Errno concepts only Darwin spells.
        static OS_EXT: &[Mapping] = &[
            row(BSM_ENOSTR, libc::ENOSTR),
            row(BSM_EPWROFF, libc::EPWROFF),
            row(BSM_EDEVERR, libc::EDEVERR),
            row(BSM_EBADEXEC, libc::EBADEXEC),
            row(BSM_EBADARCH, libc::EBADARCH),
            row(BSM_ESHLIBVERS, libc::ESHLIBVERS),
            row(BSM_EBADMACHO, libc::EBADMACHO),
        ];
    } else {
        // FreeBSD and the remaining targets carry no rows beyond the
        // portable base.
        static OS_EXT: &[Mapping] = &[];
    }
}

/// Iterate the composed table: portable rows first, then this
/// platform's extension rows.
#[inline]
pub fn entries() -> impl Iterator<Item = &'static Mapping> {
    BASE.iter().chain(OS_EXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted(slice: &[Mapping]) {
        for pair in slice.windows(2) {
            assert!(
                pair[0].bsm < pair[1].bsm,
                "rows out of order: {} then {}",
                pair[0].bsm,
                pair[1].bsm
            );
        }
    }

    #[test]
    fn base_sorted_ascending() {
        assert_sorted(BASE);
    }

    #[test]
    fn extension_sorted_ascending() {
        assert_sorted(OS_EXT);
    }

    #[test]
    fn bsm_codes_unique() {
        let mut seen = [false; 256];
        for m in entries() {
            let octet = m.bsm.raw() as usize;
            assert!(!seen[octet], "duplicate BSM code {}", m.bsm);
            seen[octet] = true;
        }
    }

    #[test]
    fn unknown_sentinel_not_a_member() {
        assert!(entries().all(|m| m.bsm != BSM_UNKNOWNERR));
    }

    #[test]
    fn success_row_is_zero() {
        let first = entries().next().expect("table is never empty");
        assert_eq!(first.bsm, BSM_ESUCCESS);
        assert_eq!(first.errno, 0);
    }

    #[test]
    fn unassigned_octets_absent() {
        // Spot-check holes in the format's numbering.
        for raw in [75u8, 76, 100, 119, 135, 142, 152, 188, 208, 249, 255] {
            assert!(entries().all(|m| m.bsm.raw() != raw), "octet {} mapped", raw);
        }
    }
}
