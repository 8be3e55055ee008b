//! Rolls back writes whose caller stopped waiting.
//!
//! `tokio-rusqlite` runs statements on its own thread, so dropping the
//! awaiting future does not stop them. Each write is paired with an
//! [`AbortOnDrop`] guard held by the async side and a [`WriteTicket`] moved
//! into the connection closure. Dropping the guard before the write finishes
//! interrupts the running statement, and the ticket refuses to commit.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rusqlite::{ffi, Connection, InterruptHandle, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Queued,
    Running,
    Finished,
    Aborted,
}

fn lock(phase: &Mutex<Phase>) -> MutexGuard<'_, Phase> {
    phase.lock().unwrap_or_else(PoisonError::into_inner)
}

fn interrupted() -> rusqlite::Error {
    rusqlite::Error::SqliteFailure(
        ffi::Error::new(ffi::SQLITE_INTERRUPT),
        Some("write abandoned by caller".to_string()),
    )
}

/// Creates the two halves for a single write.
pub(super) fn pair(interrupt: &Arc<InterruptHandle>) -> (WriteTicket, AbortOnDrop) {
    let phase = Arc::new(Mutex::new(Phase::Queued));
    (
        WriteTicket {
            phase: phase.clone(),
        },
        AbortOnDrop {
            phase,
            interrupt: interrupt.clone(),
            armed: true,
        },
    )
}

/// Connection-side half: runs a write in a transaction that commits only
/// while the caller is still waiting.
pub(super) struct WriteTicket {
    phase: Arc<Mutex<Phase>>,
}

impl WriteTicket {
    pub(super) fn run<T>(
        self,
        conn: &mut Connection,
        write: impl FnOnce(&Transaction<'_>) -> rusqlite::Result<T>,
    ) -> rusqlite::Result<T> {
        {
            let mut phase = lock(&self.phase);
            if *phase == Phase::Aborted {
                return Err(interrupted());
            }
            *phase = Phase::Running;
        }

        let tx = conn.transaction()?;
        let value = write(&tx)?;

        // Held through the commit so an abort either lands before it or not at all.
        let mut phase = lock(&self.phase);
        if *phase == Phase::Aborted {
            return Err(interrupted());
        }
        tx.commit()?;
        *phase = Phase::Finished;
        Ok(value)
    }
}

/// Async-side half. Dropped while armed, it aborts the paired write.
pub(super) struct AbortOnDrop {
    phase: Arc<Mutex<Phase>>,
    interrupt: Arc<InterruptHandle>,
    armed: bool,
}

impl AbortOnDrop {
    /// Marks the write as observed by the caller.
    pub(super) fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut phase = lock(&self.phase);
        match *phase {
            Phase::Queued => *phase = Phase::Aborted,
            Phase::Running => {
                *phase = Phase::Aborted;
                self.interrupt.interrupt();
            }
            Phase::Finished | Phase::Aborted => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection() -> (Connection, Arc<InterruptHandle>) {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (v INTEGER NOT NULL)")
            .unwrap();
        let interrupt = Arc::new(conn.get_interrupt_handle());
        (conn, interrupt)
    }

    fn count(conn: &Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_observed_write_commits() {
        let (mut conn, interrupt) = connection();
        let (ticket, guard) = pair(&interrupt);

        let result = ticket.run(&mut conn, |tx| tx.execute("INSERT INTO t VALUES (1)", []));
        guard.disarm();

        assert_eq!(result.unwrap(), 1);
        assert_eq!(count(&conn), 1);
    }

    #[test]
    fn test_write_abandoned_before_start_never_runs() {
        let (mut conn, interrupt) = connection();
        let (ticket, guard) = pair(&interrupt);
        drop(guard);

        let result = ticket.run(&mut conn, |tx| tx.execute("INSERT INTO t VALUES (1)", []));

        assert!(result.is_err());
        assert_eq!(count(&conn), 0);
    }

    #[test]
    fn test_write_abandoned_mid_statement_rolls_back() {
        let (mut conn, interrupt) = connection();
        let (ticket, guard) = pair(&interrupt);
        let mut guard = Some(guard);

        let result = ticket.run(&mut conn, |tx| {
            let changed = tx.execute("INSERT INTO t VALUES (1)", [])?;
            drop(guard.take());
            Ok(changed)
        });

        let err = result.unwrap_err();
        assert_eq!(
            err.sqlite_error_code(),
            Some(rusqlite::ErrorCode::OperationInterrupted)
        );
        assert_eq!(count(&conn), 0);
    }
}
