/// Abstraction over the Game Boy bus (memory and IO).
///
/// The CPU only ever needs byte-granular access; the system MMU decides
/// which backing region a given address lands in. Tests plug in a flat
/// 64 KiB array instead.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}
