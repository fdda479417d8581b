mod device;
mod sensor_reading;

pub use device::DeviceRepository;
pub use sensor_reading::SensorReadingRepository;
