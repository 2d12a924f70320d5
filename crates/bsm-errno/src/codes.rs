//! The BSM error-number constants.
//!
//! This is the fixed, versioned list defined by the BSM audit format.
//! The numbering follows the Solaris errno assignments the format was
//! born with, which is why it diverges from every other platform's
//! native values. That divergence is the reason this crate exists.
//!
//! Gaps in the numbering (75–76, 100–119, 135–142, 152–188, 208–249)
//! are unassigned by the format and must stay unassigned here.

use crate::code::BsmErrno;

// ── Sentinels ─────────────────────────────────────────────────────

/// Successful completion. Always maps to local 0.
pub const BSM_ESUCCESS:        BsmErrno = BsmErrno::new(0);

/// Reserved catch-all for local errors with no BSM equivalent.
/// Never a valid mapping target in its own right.
pub const BSM_UNKNOWNERR:      BsmErrno = BsmErrno::new(250);

// ── Core POSIX set ────────────────────────────────────────────────

pub const BSM_EPERM:           BsmErrno = BsmErrno::new(1);
pub const BSM_ENOENT:          BsmErrno = BsmErrno::new(2);
pub const BSM_ESRCH:           BsmErrno = BsmErrno::new(3);
pub const BSM_EINTR:           BsmErrno = BsmErrno::new(4);
pub const BSM_EIO:             BsmErrno = BsmErrno::new(5);
pub const BSM_ENXIO:           BsmErrno = BsmErrno::new(6);
pub const BSM_E2BIG:           BsmErrno = BsmErrno::new(7);
pub const BSM_ENOEXEC:         BsmErrno = BsmErrno::new(8);
pub const BSM_EBADF:           BsmErrno = BsmErrno::new(9);
pub const BSM_ECHILD:          BsmErrno = BsmErrno::new(10);
pub const BSM_EAGAIN:          BsmErrno = BsmErrno::new(11);
pub const BSM_ENOMEM:          BsmErrno = BsmErrno::new(12);
pub const BSM_EACCES:          BsmErrno = BsmErrno::new(13);
pub const BSM_EFAULT:          BsmErrno = BsmErrno::new(14);
pub const BSM_ENOTBLK:         BsmErrno = BsmErrno::new(15);
pub const BSM_EBUSY:           BsmErrno = BsmErrno::new(16);
pub const BSM_EEXIST:          BsmErrno = BsmErrno::new(17);
pub const BSM_EXDEV:           BsmErrno = BsmErrno::new(18);
pub const BSM_ENODEV:          BsmErrno = BsmErrno::new(19);
pub const BSM_ENOTDIR:         BsmErrno = BsmErrno::new(20);
pub const BSM_EISDIR:          BsmErrno = BsmErrno::new(21);
pub const BSM_EINVAL:          BsmErrno = BsmErrno::new(22);
pub const BSM_ENFILE:          BsmErrno = BsmErrno::new(23);
pub const BSM_EMFILE:          BsmErrno = BsmErrno::new(24);
pub const BSM_ENOTTY:          BsmErrno = BsmErrno::new(25);
pub const BSM_ETXTBSY:         BsmErrno = BsmErrno::new(26);
pub const BSM_EFBIG:           BsmErrno = BsmErrno::new(27);
pub const BSM_ENOSPC:          BsmErrno = BsmErrno::new(28);
pub const BSM_ESPIPE:          BsmErrno = BsmErrno::new(29);
pub const BSM_EROFS:           BsmErrno = BsmErrno::new(30);
pub const BSM_EMLINK:          BsmErrno = BsmErrno::new(31);
pub const BSM_EPIPE:           BsmErrno = BsmErrno::new(32);
pub const BSM_EDOM:            BsmErrno = BsmErrno::new(33);
pub const BSM_ERANGE:          BsmErrno = BsmErrno::new(34);
pub const BSM_ENOMSG:          BsmErrno = BsmErrno::new(35);
pub const BSM_EIDRM:           BsmErrno = BsmErrno::new(36);

// ── SysV / STREAMS lineage (Solaris and Linux trees) ──────────────

pub const BSM_ECHRNG:          BsmErrno = BsmErrno::new(37);
pub const BSM_EL2NSYNC:        BsmErrno = BsmErrno::new(38);
pub const BSM_EL3HLT:          BsmErrno = BsmErrno::new(39);
pub const BSM_EL3RST:          BsmErrno = BsmErrno::new(40);
pub const BSM_ELNRNG:          BsmErrno = BsmErrno::new(41);
pub const BSM_EUNATCH:         BsmErrno = BsmErrno::new(42);
pub const BSM_ENOCSI:          BsmErrno = BsmErrno::new(43);
pub const BSM_EL2HLT:          BsmErrno = BsmErrno::new(44);

pub const BSM_EDEADLK:         BsmErrno = BsmErrno::new(45);
pub const BSM_ENOLCK:          BsmErrno = BsmErrno::new(46);
pub const BSM_ECANCELED:       BsmErrno = BsmErrno::new(47);
pub const BSM_ENOTSUP:         BsmErrno = BsmErrno::new(48);
pub const BSM_EDQUOT:          BsmErrno = BsmErrno::new(49);

pub const BSM_EBADE:           BsmErrno = BsmErrno::new(50);
pub const BSM_EBADR:           BsmErrno = BsmErrno::new(51);
pub const BSM_EXFULL:          BsmErrno = BsmErrno::new(52);
pub const BSM_ENOANO:          BsmErrno = BsmErrno::new(53);
pub const BSM_EBADRQC:         BsmErrno = BsmErrno::new(54);
pub const BSM_EBADSLT:         BsmErrno = BsmErrno::new(55);
pub const BSM_EDEADLOCK:       BsmErrno = BsmErrno::new(56);
pub const BSM_EBFONT:          BsmErrno = BsmErrno::new(57);
pub const BSM_EOWNERDEAD:      BsmErrno = BsmErrno::new(58);
pub const BSM_ENOTRECOVERABLE: BsmErrno = BsmErrno::new(59);
pub const BSM_ENOSTR:          BsmErrno = BsmErrno::new(60);
pub const BSM_ENODATA:         BsmErrno = BsmErrno::new(61);
pub const BSM_ETIME:           BsmErrno = BsmErrno::new(62);
pub const BSM_ENOSR:           BsmErrno = BsmErrno::new(63);
pub const BSM_ENONET:          BsmErrno = BsmErrno::new(64);
pub const BSM_ENOPKG:          BsmErrno = BsmErrno::new(65);
pub const BSM_EREMOTE:         BsmErrno = BsmErrno::new(66);
pub const BSM_ENOLINK:         BsmErrno = BsmErrno::new(67);
pub const BSM_EADV:            BsmErrno = BsmErrno::new(68);
pub const BSM_ESRMNT:          BsmErrno = BsmErrno::new(69);
pub const BSM_ECOMM:           BsmErrno = BsmErrno::new(70);
pub const BSM_EPROTO:          BsmErrno = BsmErrno::new(71);
pub const BSM_ELOCKUNMAPPED:   BsmErrno = BsmErrno::new(72); // Solaris only
pub const BSM_ENOTACTIVE:      BsmErrno = BsmErrno::new(73); // Solaris only
pub const BSM_EMULTIHOP:       BsmErrno = BsmErrno::new(74);
pub const BSM_EBADMSG:         BsmErrno = BsmErrno::new(77);
pub const BSM_ENAMETOOLONG:    BsmErrno = BsmErrno::new(78);
pub const BSM_EOVERFLOW:       BsmErrno = BsmErrno::new(79);
pub const BSM_ENOTUNIQ:        BsmErrno = BsmErrno::new(80);
pub const BSM_EBADFD:          BsmErrno = BsmErrno::new(81);
pub const BSM_EREMCHG:         BsmErrno = BsmErrno::new(82);
pub const BSM_ELIBACC:         BsmErrno = BsmErrno::new(83);
pub const BSM_ELIBBAD:         BsmErrno = BsmErrno::new(84);
pub const BSM_ELIBSCN:         BsmErrno = BsmErrno::new(85);
pub const BSM_ELIBMAX:         BsmErrno = BsmErrno::new(86);
pub const BSM_ELIBEXEC:        BsmErrno = BsmErrno::new(87);
pub const BSM_EILSEQ:          BsmErrno = BsmErrno::new(88);
pub const BSM_ENOSYS:          BsmErrno = BsmErrno::new(89);
pub const BSM_ELOOP:           BsmErrno = BsmErrno::new(90);
pub const BSM_ERESTART:        BsmErrno = BsmErrno::new(91);
pub const BSM_ESTRPIPE:        BsmErrno = BsmErrno::new(92);
pub const BSM_ENOTEMPTY:       BsmErrno = BsmErrno::new(93);
pub const BSM_EUSERS:          BsmErrno = BsmErrno::new(94);

// ── Sockets ───────────────────────────────────────────────────────

pub const BSM_ENOTSOCK:        BsmErrno = BsmErrno::new(95);
pub const BSM_EDESTADDRREQ:    BsmErrno = BsmErrno::new(96);
pub const BSM_EMSGSIZE:        BsmErrno = BsmErrno::new(97);
pub const BSM_EPROTOTYPE:      BsmErrno = BsmErrno::new(98);
pub const BSM_ENOPROTOOPT:     BsmErrno = BsmErrno::new(99);
pub const BSM_EPROTONOSUPPORT: BsmErrno = BsmErrno::new(120);
pub const BSM_ESOCKTNOSUPPORT: BsmErrno = BsmErrno::new(121);
pub const BSM_EOPNOTSUPP:      BsmErrno = BsmErrno::new(122);
pub const BSM_EPFNOSUPPORT:    BsmErrno = BsmErrno::new(123);
pub const BSM_EAFNOSUPPORT:    BsmErrno = BsmErrno::new(124);
pub const BSM_EADDRINUSE:      BsmErrno = BsmErrno::new(125);
pub const BSM_EADDRNOTAVAIL:   BsmErrno = BsmErrno::new(126);
pub const BSM_ENETDOWN:        BsmErrno = BsmErrno::new(127);
pub const BSM_ENETUNREACH:     BsmErrno = BsmErrno::new(128);
pub const BSM_ENETRESET:       BsmErrno = BsmErrno::new(129);
pub const BSM_ECONNABORTED:    BsmErrno = BsmErrno::new(130);
pub const BSM_ECONNRESET:      BsmErrno = BsmErrno::new(131);
pub const BSM_ENOBUFS:         BsmErrno = BsmErrno::new(132);
pub const BSM_EISCONN:         BsmErrno = BsmErrno::new(133);
pub const BSM_ENOTCONN:        BsmErrno = BsmErrno::new(134);
pub const BSM_ESHUTDOWN:       BsmErrno = BsmErrno::new(143);
pub const BSM_ETOOMANYREFS:    BsmErrno = BsmErrno::new(144);
pub const BSM_ETIMEDOUT:       BsmErrno = BsmErrno::new(145);
pub const BSM_ECONNREFUSED:    BsmErrno = BsmErrno::new(146);
pub const BSM_EHOSTDOWN:       BsmErrno = BsmErrno::new(147);
pub const BSM_EHOSTUNREACH:    BsmErrno = BsmErrno::new(148);
pub const BSM_EALREADY:        BsmErrno = BsmErrno::new(149);
pub const BSM_EINPROGRESS:     BsmErrno = BsmErrno::new(150);
pub const BSM_ESTALE:          BsmErrno = BsmErrno::new(151);

// ── Darwin additions ──────────────────────────────────────────────

pub const BSM_EPWROFF:         BsmErrno = BsmErrno::new(189);
pub const BSM_EDEVERR:         BsmErrno = BsmErrno::new(190);
pub const BSM_EBADEXEC:        BsmErrno = BsmErrno::new(191);
pub const BSM_EBADARCH:        BsmErrno = BsmErrno::new(192);
pub const BSM_ESHLIBVERS:      BsmErrno = BsmErrno::new(193);
pub const BSM_EBADMACHO:       BsmErrno = BsmErrno::new(194);
pub const BSM_EPOLICY:         BsmErrno = BsmErrno::new(195);

// ── Linux additions ───────────────────────────────────────────────

pub const BSM_EDOTDOT:         BsmErrno = BsmErrno::new(196);
pub const BSM_EUCLEAN:         BsmErrno = BsmErrno::new(197);
pub const BSM_ENOTNAM:         BsmErrno = BsmErrno::new(198);
pub const BSM_ENAVAIL:         BsmErrno = BsmErrno::new(199);
pub const BSM_EISNAM:          BsmErrno = BsmErrno::new(200);
pub const BSM_EREMOTEIO:       BsmErrno = BsmErrno::new(201);
pub const BSM_ENOMEDIUM:       BsmErrno = BsmErrno::new(202);
pub const BSM_EMEDIUMTYPE:     BsmErrno = BsmErrno::new(203);
pub const BSM_ENOKEY:          BsmErrno = BsmErrno::new(204);
pub const BSM_EKEYEXPIRED:     BsmErrno = BsmErrno::new(205);
pub const BSM_EKEYREVOKED:     BsmErrno = BsmErrno::new(206);
pub const BSM_EKEYREJECTED:    BsmErrno = BsmErrno::new(207);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels() {
        assert_eq!(BSM_ESUCCESS.raw(), 0);
        assert_eq!(BSM_UNKNOWNERR.raw(), 250);
    }

    #[test]
    fn solaris_numbering_holds() {
        // Spot checks against the format's published assignments.
        assert_eq!(BSM_ENOENT.raw(), 2);
        assert_eq!(BSM_EIDRM.raw(), 36);
        assert_eq!(BSM_EBADMSG.raw(), 77);
        assert_eq!(BSM_EPROTONOSUPPORT.raw(), 120);
        assert_eq!(BSM_ESTALE.raw(), 151);
        assert_eq!(BSM_EPWROFF.raw(), 189);
        assert_eq!(BSM_EKEYREJECTED.raw(), 207);
    }
}
